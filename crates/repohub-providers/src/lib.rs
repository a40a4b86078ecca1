//! # RepoHub - Provider Implementations
//!
//! User-selectable repository host providers. Each one implements the
//! [`RepoApi`] port from `repohub-domain` and registers itself into the
//! `REPO_PROVIDERS` slice of `repohub-application`.
//!
//! | Category | Provider | Endpoint |
//! |----------|----------|----------|
//! | `github` | [`GithubProvider`] | `https://api.github.com` |
//! | `gitee` | [`GiteeProvider`] | `https://gitee.com/api/v5` |
//!
//! Binaries must reference this crate (e.g. `extern crate repohub_providers;`)
//! so the linker keeps the registrations.

pub use repohub_domain::error::{Error, Result};
pub use repohub_domain::ports::{Payload, RepoApi};

/// GitHub repository host
pub mod github;

/// Gitee repository host
pub mod gitee;

mod receipt;

pub use gitee::GiteeProvider;
pub use github::GithubProvider;
