//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use repohub_domain::constants::PROVIDER_GITHUB;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default submission target
    pub submission: SubmissionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Which provider to submit to when the command line does not say
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Provider category (e.g. "github", "gitee")
    pub provider: String,
    /// Credential handed to the provider
    pub token: Option<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            provider: PROVIDER_GITHUB.to_string(),
            token: None,
        }
    }
}

impl std::fmt::Debug for SubmissionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionConfig")
            .field("provider", &self.provider)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
