//! Strategy Binding
//!
//! Holds one already-chosen provider so call sites can submit without
//! knowing category names or concrete provider types.

use std::fmt;

use repohub_domain::error::Result;
use repohub_domain::ports::{Payload, RepoApi};

/// A pre-resolved repository provider
///
/// The binding owns its provider exclusively and never replaces it.
///
/// # Example
///
/// ```ignore
/// let provider = ProviderRegistry::instance().try_create("github", "github token")?;
/// let binding = StrategyBinding::bind(provider);
/// let result = binding.submit(Payload::new())?;
/// ```
pub struct StrategyBinding {
    service: Box<dyn RepoApi>,
}

impl StrategyBinding {
    /// Wrap a provider handle
    ///
    /// Any `RepoApi` is accepted, whether or not it came from the registry.
    pub fn bind(service: Box<dyn RepoApi>) -> Self {
        Self { service }
    }

    /// Wrap a concrete provider value
    pub fn of<P: RepoApi + 'static>(provider: P) -> Self {
        Self::bind(Box::new(provider))
    }

    /// The wrapped provider
    pub fn service(&self) -> &dyn RepoApi {
        self.service.as_ref()
    }

    /// Submit through the wrapped provider
    pub fn submit(&self, payload: Payload) -> Result<Payload> {
        self.service.submit(payload)
    }
}

impl From<Box<dyn RepoApi>> for StrategyBinding {
    fn from(service: Box<dyn RepoApi>) -> Self {
        Self::bind(service)
    }
}

impl fmt::Debug for StrategyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyBinding")
            .field("provider", &self.service.provider_name())
            .finish()
    }
}
