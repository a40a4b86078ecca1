//! GitHub provider
//!
//! Submits payloads on behalf of a GitHub access token.

use std::fmt;

use repohub_domain::constants::{GITHUB_API_BASE_URL, PROVIDER_GITHUB};
use repohub_domain::error::Result;
use repohub_domain::ports::{Payload, RepoApi};
use tracing::debug;

use crate::receipt::submission_receipt;

/// GitHub repository host provider
///
/// # Example
///
/// ```
/// use repohub_providers::{GithubProvider, Payload, RepoApi};
///
/// let provider = GithubProvider::new("github token");
/// let receipt = provider.submit(Payload::new()).unwrap();
/// assert_eq!(receipt["provider"], "github");
/// ```
#[derive(Clone)]
pub struct GithubProvider {
    token: String,
}

impl GithubProvider {
    /// Create a provider holding `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The API base URL submissions target
    pub fn endpoint(&self) -> &'static str {
        GITHUB_API_BASE_URL
    }
}

impl fmt::Debug for GithubProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubProvider")
            .field("token", &"***")
            .finish()
    }
}

impl RepoApi for GithubProvider {
    fn submit(&self, payload: Payload) -> Result<Payload> {
        debug!(
            provider = PROVIDER_GITHUB,
            fields = payload.len(),
            "Submitting payload"
        );
        submission_receipt(PROVIDER_GITHUB, self.endpoint(), &self.token, payload)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_GITHUB
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use repohub_application::registry::{REPO_PROVIDERS, RepoProviderEntry};

/// Factory function for creating GitHub provider instances.
fn github_provider_factory(token: &str) -> Box<dyn RepoApi> {
    Box::new(GithubProvider::new(token))
}

#[linkme::distributed_slice(REPO_PROVIDERS)]
static GITHUB_PROVIDER: RepoProviderEntry = RepoProviderEntry {
    name: PROVIDER_GITHUB,
    description: "GitHub repository host (api.github.com)",
    factory: github_provider_factory,
};
