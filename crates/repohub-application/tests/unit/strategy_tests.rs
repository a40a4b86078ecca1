//! Tests for binding registry-created providers into a strategy

use repohub_application::{ProviderRegistry, StrategyBinding};
use repohub_domain::Payload;
use serde_json::json;

fn payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("path".into(), json!("docs/index.md"));
    payload.insert("content".into(), json!("hello"));
    payload
}

#[test]
fn test_binding_keeps_the_registry_handle() {
    let handle = ProviderRegistry::instance()
        .create("github", "github token")
        .expect("github should resolve");
    let before = std::ptr::from_ref(handle.as_ref()).cast::<()>();

    let binding = StrategyBinding::bind(handle);

    assert_eq!(std::ptr::from_ref(binding.service()).cast::<()>(), before);
    assert_eq!(binding.service().provider_name(), "github");
}

#[test]
fn test_bound_submit_matches_direct_submit() {
    let registry = ProviderRegistry::instance();
    let direct = registry.create("gitee", "gitee token").expect("gitee");
    let bound = StrategyBinding::bind(registry.create("gitee", "gitee token").expect("gitee"));

    let direct_result = direct.submit(payload()).expect("direct submit");
    let bound_result = bound.submit(payload()).expect("bound submit");

    assert_eq!(direct_result, bound_result);
}

#[test]
fn test_binding_accepts_provider_built_outside_registry() {
    let binding = StrategyBinding::of(repohub_providers::GithubProvider::new("github token"));
    let result = binding.submit(Payload::new()).expect("submit");
    assert_eq!(result.get("provider"), Some(&json!("github")));
}
