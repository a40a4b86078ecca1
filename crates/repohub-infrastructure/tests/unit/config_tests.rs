//! Configuration loading tests

use std::io::Write;

use repohub_domain::Error;
use repohub_infrastructure::config::{AppConfig, ConfigLoader};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
    assert_eq!(config.submission.provider, "github");
    assert!(config.submission.token.is_none());
}

#[test]
fn test_missing_explicit_file_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("typo.toml");

    let result = ConfigLoader::new()
        .with_config_path(&missing)
        .with_env_prefix("REPOHUB_TEST_MISSING")
        .load();

    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("Configuration file not found"));
            assert!(message.contains("typo.toml"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_environment_overrides_nested_keys() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "repohub.toml",
            "[logging]\njson_format = false\n\n[submission]\nprovider = \"github\"\n",
        )?;
        jail.set_env("REPOHUB_TEST_ENV_LOGGING__JSON_FORMAT", "true");
        jail.set_env("REPOHUB_TEST_ENV_SUBMISSION__PROVIDER", "gitee");
        jail.set_env("REPOHUB_TEST_ENV_SUBMISSION__TOKEN", "env token");

        let config = ConfigLoader::new()
            .with_config_path(jail.directory().join("repohub.toml"))
            .with_env_prefix("REPOHUB_TEST_ENV")
            .load()
            .map_err(|e| e.to_string())?;

        assert!(config.logging.json_format);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.submission.provider, "gitee");
        assert_eq!(config.submission.token.as_deref(), Some("env token"));
        Ok(())
    });
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"
json_format = true

[submission]
provider = "gitee"
token = "gitee token"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("REPOHUB_TEST_FILE")
        .load()
        .expect("load config");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.submission.provider, "gitee");
    assert_eq!(config.submission.token.as_deref(), Some("gitee token"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("[submission]\nprovider = \"gitee\"\n");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("REPOHUB_TEST_PARTIAL")
        .load()
        .expect("load config");

    assert_eq!(config.submission.provider, "gitee");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("REPOHUB_TEST_INVALID")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = write_config("[submission\nprovider = ");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("REPOHUB_TEST_MALFORMED")
        .load();

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("Failed to extract configuration"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_token_is_redacted_in_debug() {
    let file = write_config("[submission]\ntoken = \"very-secret\"\n");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("REPOHUB_TEST_REDACT")
        .load()
        .expect("load config");

    let rendered = format!("{config:?}");
    assert!(!rendered.contains("very-secret"));
    assert!(rendered.contains("***"));
}
