//! Repository Host Port
//!
//! The single capability shared by all repository host providers.
//! Every provider exposes exactly the same call shape, so callers holding a
//! `dyn RepoApi` never need to know which host they are talking to.

use crate::error::Result;

/// Submission payload and result: string keys mapped to arbitrary values
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Capability for submitting data to a remote repository host
///
/// # Example
///
/// ```
/// use repohub_domain::{Payload, RepoApi, Result};
///
/// struct Echo;
///
/// impl RepoApi for Echo {
///     fn submit(&self, payload: Payload) -> Result<Payload> {
///         Ok(payload)
///     }
///
///     fn provider_name(&self) -> &str {
///         "echo"
///     }
/// }
///
/// let echo = Echo;
/// assert!(echo.submit(Payload::new()).unwrap().is_empty());
/// ```
pub trait RepoApi: Send + Sync {
    /// Submit a payload to the repository host
    ///
    /// Failures raised by the provider (authentication, transport) are
    /// returned unchanged through the error channel.
    fn submit(&self, payload: Payload) -> Result<Payload>;

    /// Category name of this provider (e.g. "github")
    fn provider_name(&self) -> &str;
}
