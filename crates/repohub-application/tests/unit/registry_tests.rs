//! Tests for the repository provider registry
//!
//! Resolves the real providers registered by repohub-providers through
//! the global registry.

use repohub_application::registry::*;
use repohub_domain::Error;
use repohub_domain::constants::{PROVIDER_GITEE, PROVIDER_GITHUB};

#[test]
fn test_builtin_providers_are_registered() {
    let registry = ProviderRegistry::instance();

    assert!(registry.contains(PROVIDER_GITHUB));
    assert!(registry.contains(PROVIDER_GITEE));
    assert_eq!(registry.names(), vec![PROVIDER_GITEE, PROVIDER_GITHUB]);
}

#[test]
fn test_known_categories_create_matching_variant() {
    let registry = ProviderRegistry::instance();

    for category in [PROVIDER_GITHUB, PROVIDER_GITEE] {
        let provider = registry
            .create(category, "token")
            .unwrap_or_else(|| panic!("{category} should be registered"));
        assert_eq!(provider.provider_name(), category);
    }
}

#[test]
fn test_create_gitee() {
    let provider = ProviderRegistry::instance()
        .create("gitee", "tok1")
        .expect("gitee should resolve");
    assert_eq!(provider.provider_name(), "gitee");
}

#[test]
fn test_create_unknown_category_is_absent() {
    let registry = ProviderRegistry::instance();

    assert!(registry.create("bitbucket", "tok2").is_none());
    assert!(registry.create("bitbucket", "").is_none());
    assert!(registry.create("GitHub", "tok2").is_none());
}

#[test]
fn test_resolve_unknown_provider_fails() {
    match resolve_repo_provider("bitbucket", "tok2") {
        Err(Error::UnknownProvider {
            category,
            available,
        }) => {
            assert_eq!(category, "bitbucket");
            assert!(available.contains(&"github".to_string()));
            assert!(available.contains(&"gitee".to_string()));
        }
        Err(other) => panic!("Expected UnknownProvider, got {other}"),
        Ok(_) => panic!("Expected error for unknown provider"),
    }
}

#[test]
fn test_list_providers_has_descriptions() {
    let providers = list_repo_providers();

    assert!(providers.len() >= 2);
    for (name, description) in &providers {
        assert!(!name.is_empty(), "Provider name should not be empty");
        assert!(
            !description.is_empty(),
            "Provider {name} should have a description"
        );
    }
}
