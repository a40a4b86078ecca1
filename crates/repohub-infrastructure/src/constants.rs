//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `repohub_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repohub.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "repohub";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "REPOHUB";

/// Separator for nested keys in environment variables (e.g. `REPOHUB_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "REPOHUB_LOG";

/// File name prefix for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_PREFIX: &str = "repohub";
