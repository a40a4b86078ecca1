//! Application Layer - RepoHub
//!
//! Decides which repository host provider serves a caller and hands the
//! chosen provider over in a form that hides the decision.
//!
//! ## Flow
//!
//! ```text
//! caller → ProviderRegistry::instance().create(category, credential)
//!        → Box<dyn RepoApi>
//!        → StrategyBinding::bind(..)      (optional)
//!        → binding.submit(payload)
//! ```
//!
//! - [`registry`]: the process-wide category → provider registry
//! - [`strategy`]: a wrapper holding one pre-resolved provider

pub mod registry;
pub mod strategy;

pub use registry::{
    ProviderRegistry, REPO_PROVIDERS, RepoProviderEntry, list_repo_providers,
    resolve_repo_provider,
};
pub use strategy::StrategyBinding;
