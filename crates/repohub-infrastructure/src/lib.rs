//! Infrastructure Layer - RepoHub
//!
//! Cross-cutting technical concerns shared by the binary:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context helpers for converting foreign errors

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, SubmissionConfig};
pub use logging::init_logging;
