//! Domain constants
//!
//! Category identifiers and host endpoints for the built-in providers.

// ============================================================================
// PROVIDER CATEGORIES
// ============================================================================

/// Category identifier for the GitHub provider
pub const PROVIDER_GITHUB: &str = "github";

/// Category identifier for the Gitee provider
pub const PROVIDER_GITEE: &str = "gitee";

// ============================================================================
// HOST ENDPOINTS
// ============================================================================

/// GitHub REST API base URL
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Gitee REST API base URL
pub const GITEE_API_BASE_URL: &str = "https://gitee.com/api/v5";
