//! Repository Provider Registry
//!
//! Auto-registration system for repository host providers using linkme
//! distributed slices. Providers register themselves via
//! `#[linkme::distributed_slice(REPO_PROVIDERS)]` and are discovered at
//! runtime by the process-wide [`ProviderRegistry`].
//!
//! ## Registering a Provider (in repohub-providers)
//!
//! ```ignore
//! use repohub_application::registry::{RepoProviderEntry, REPO_PROVIDERS};
//!
//! #[linkme::distributed_slice(REPO_PROVIDERS)]
//! static GITHUB_PROVIDER: RepoProviderEntry = RepoProviderEntry {
//!     name: "github",
//!     description: "GitHub repository host",
//!     factory: |token| Box::new(GithubProvider::new(token)),
//! };
//! ```
//!
//! ## Resolving a Provider
//!
//! ```ignore
//! use repohub_application::ProviderRegistry;
//!
//! match ProviderRegistry::instance().create("gitee", "gitee token") {
//!     Some(provider) => { provider.submit(Payload::new())?; }
//!     None => { /* unknown category, caller decides */ }
//! }
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use repohub_domain::error::{Error, Result};
use repohub_domain::ports::RepoApi;
use tracing::{debug, warn};

/// Registry entry for repository host providers
///
/// Each provider implementation registers itself with this entry. The
/// factory receives the caller's credential untouched.
pub struct RepoProviderEntry {
    /// Unique category name (e.g., "github", "gitee")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a provider instance from a credential
    pub factory: fn(&str) -> Box<dyn RepoApi>,
}

// Auto-collection via linkme distributed slices - providers submit entries at link time
#[linkme::distributed_slice]
pub static REPO_PROVIDERS: [RepoProviderEntry] = [..];

/// Global registry instance
static REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Process-wide mapping from category name to provider factory
///
/// Built once from [`REPO_PROVIDERS`] on first access and immutable
/// afterwards, so lookups need no locking. [`ProviderRegistry::instance`]
/// is the only way to obtain one:
///
/// ```compile_fail
/// use repohub_application::registry::{ProviderRegistry, REPO_PROVIDERS};
///
/// let second = ProviderRegistry::from_entries(REPO_PROVIDERS.iter());
/// ```
pub struct ProviderRegistry {
    entries: HashMap<&'static str, &'static RepoProviderEntry>,
}

impl ProviderRegistry {
    /// Get the process-wide registry
    ///
    /// Concurrent first callers block until a single construction finishes;
    /// every caller receives the same instance.
    pub fn instance() -> &'static ProviderRegistry {
        REGISTRY.get_or_init(|| Self::from_entries(REPO_PROVIDERS.iter()))
    }

    /// Build a registry from an explicit set of entries
    ///
    /// When two entries share a name the first one wins.
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'static RepoProviderEntry>,
    {
        let mut map: HashMap<&'static str, &'static RepoProviderEntry> = HashMap::new();
        for entry in entries {
            if map.contains_key(entry.name) {
                warn!(
                    provider = entry.name,
                    "Duplicate repository provider registration ignored"
                );
                continue;
            }
            map.insert(entry.name, entry);
        }
        debug!(count = map.len(), "Repository provider registry built");
        Self { entries: map }
    }

    /// Create a provider for `category`, initialized with `credential`
    ///
    /// Matching is exact and case-sensitive. An unknown category yields
    /// `None`; deciding whether that is fatal is up to the caller.
    pub fn create(&self, category: &str, credential: &str) -> Option<Box<dyn RepoApi>> {
        match self.entries.get(category) {
            Some(entry) => {
                debug!(provider = entry.name, "Creating repository provider");
                Some((entry.factory)(credential))
            }
            None => {
                debug!(category, "No repository provider registered for category");
                None
            }
        }
    }

    /// Create a provider, treating an unknown category as an error
    pub fn try_create(&self, category: &str, credential: &str) -> Result<Box<dyn RepoApi>> {
        self.create(category, credential).ok_or_else(|| {
            Error::unknown_provider(
                category,
                self.names().into_iter().map(str::to_string).collect(),
            )
        })
    }

    /// Whether a provider is registered under `category`
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Registered provider names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// (name, description) for every registered provider, sorted by name
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        let mut providers: Vec<(&'static str, &'static str)> = self
            .entries
            .values()
            .map(|e| (e.name, e.description))
            .collect();
        providers.sort_unstable_by_key(|(name, _)| *name);
        providers
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a repository provider by category from the global registry
///
/// # Returns
/// * `Ok(Box<dyn RepoApi>)` - Created provider instance
/// * `Err(Error::UnknownProvider)` - No provider registered under `category`
pub fn resolve_repo_provider(category: &str, credential: &str) -> Result<Box<dyn RepoApi>> {
    ProviderRegistry::instance().try_create(category, credential)
}

/// List all registered repository providers
///
/// Returns (name, description) tuples. Useful for CLI help.
pub fn list_repo_providers() -> Vec<(&'static str, &'static str)> {
    ProviderRegistry::instance().list()
}
