//! Unit tests for the repository host port

use repohub_domain::{Error, Payload, RepoApi, Result};
use serde_json::json;

/// Provider double that counts the keys it was given
struct CountingProvider;

impl RepoApi for CountingProvider {
    fn submit(&self, payload: Payload) -> Result<Payload> {
        let mut result = Payload::new();
        result.insert("count".into(), json!(payload.len()));
        Ok(result)
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Provider double that always fails
struct FailingProvider;

impl RepoApi for FailingProvider {
    fn submit(&self, _payload: Payload) -> Result<Payload> {
        Err(Error::authentication("always fails"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

#[test]
fn test_providers_share_one_call_shape() {
    let providers: Vec<Box<dyn RepoApi>> = vec![Box::new(CountingProvider), Box::new(FailingProvider)];

    let names: Vec<&str> = providers.iter().map(|p| p.provider_name()).collect();
    assert_eq!(names, vec!["counting", "failing"]);
}

#[test]
fn test_submit_accepts_empty_payload() {
    let result = CountingProvider.submit(Payload::new()).expect("submit should succeed");
    assert_eq!(result.get("count"), Some(&json!(0)));
}

#[test]
fn test_provider_errors_pass_through_unchanged() {
    let provider: Box<dyn RepoApi> = Box::new(FailingProvider);
    match provider.submit(Payload::new()) {
        Err(Error::Authentication { message }) => assert_eq!(message, "always fails"),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
}
