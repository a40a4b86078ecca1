//! Gitee provider
//!
//! Submits payloads on behalf of a Gitee personal access token. Gitee's v5
//! API mirrors GitHub's resource layout, so the receipt shape is identical.

use std::fmt;

use repohub_domain::constants::{GITEE_API_BASE_URL, PROVIDER_GITEE};
use repohub_domain::error::Result;
use repohub_domain::ports::{Payload, RepoApi};
use tracing::debug;

use crate::receipt::submission_receipt;

/// Gitee repository host provider
///
/// # Example
///
/// ```
/// use repohub_providers::{GiteeProvider, Payload, RepoApi};
///
/// let provider = GiteeProvider::new("gitee token");
/// let receipt = provider.submit(Payload::new()).unwrap();
/// assert_eq!(receipt["provider"], "gitee");
/// ```
#[derive(Clone)]
pub struct GiteeProvider {
    token: String,
}

impl GiteeProvider {
    /// Create a provider holding `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The API base URL submissions target
    pub fn endpoint(&self) -> &'static str {
        GITEE_API_BASE_URL
    }
}

impl fmt::Debug for GiteeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GiteeProvider")
            .field("token", &"***")
            .finish()
    }
}

impl RepoApi for GiteeProvider {
    fn submit(&self, payload: Payload) -> Result<Payload> {
        debug!(
            provider = PROVIDER_GITEE,
            fields = payload.len(),
            "Submitting payload"
        );
        submission_receipt(PROVIDER_GITEE, self.endpoint(), &self.token, payload)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_GITEE
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use repohub_application::registry::{REPO_PROVIDERS, RepoProviderEntry};

/// Factory function for creating Gitee provider instances.
fn gitee_provider_factory(token: &str) -> Box<dyn RepoApi> {
    Box::new(GiteeProvider::new(token))
}

#[linkme::distributed_slice(REPO_PROVIDERS)]
static GITEE_PROVIDER: RepoProviderEntry = RepoProviderEntry {
    name: PROVIDER_GITEE,
    description: "Gitee repository host (gitee.com)",
    factory: gitee_provider_factory,
};
