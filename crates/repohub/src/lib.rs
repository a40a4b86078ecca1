//! # RepoHub
//!
//! Submit data to remote repository hosts through a pluggable provider
//! registry.
//!
//! A caller names a provider category and a credential, receives a handle
//! implementing [`RepoApi`], and can optionally wrap it in a
//! [`StrategyBinding`] so downstream code never sees category names.
//!
//! ## Example
//!
//! ```
//! use repohub::{Payload, ProviderRegistry, StrategyBinding};
//!
//! let registry = ProviderRegistry::instance();
//!
//! // Unknown categories are an ordinary outcome
//! assert!(registry.create("bitbucket", "token").is_none());
//!
//! let provider = registry.create("gitee", "gitee token").expect("gitee is built in");
//! let binding = StrategyBinding::bind(provider);
//! let receipt = binding.submit(Payload::new()).unwrap();
//! assert_eq!(receipt["provider"], "gitee");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability port, payload type, errors
//! - `application` - provider registry and strategy binding
//! - `providers` - GitHub and Gitee providers
//! - `infrastructure` - configuration and logging
//! - `cli` - command line front end

/// Domain layer - capability port and core types
pub mod domain {
    pub use repohub_domain::*;
}

/// Application layer - provider registry and strategy binding
pub mod application {
    pub use repohub_application::*;
}

/// Provider implementations
pub mod providers {
    pub use repohub_providers::*;
}

/// Infrastructure layer - configuration and logging
pub mod infrastructure {
    pub use repohub_infrastructure::*;
}

pub mod cli;

pub use application::{ProviderRegistry, StrategyBinding};
pub use cli::{Cli, Command, run};
pub use domain::{Error, Payload, RepoApi, Result};
