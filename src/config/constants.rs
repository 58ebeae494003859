//! Environment variable names and endpoint addresses
//!
//! All hardcoded values live here so the mapping in `types.rs` reads as a
//! plain table.

// =============================================================================
// Environment Indicator
// =============================================================================

/// Process-wide variable selecting the deployment mode
pub const ENV_INDICATOR_VAR: &str = "NODE_ENV";

/// Indicator value for local development
pub const DEV_INDICATOR: &str = "dev";

/// Indicator value for production
pub const PROD_INDICATOR: &str = "prod";

// =============================================================================
// WebSocket Endpoints
// =============================================================================

/// Local development server
pub const DEV_WS_URL: &str = "ws://127.0.0.1:8080";

/// Production server
pub const PROD_WS_URL: &str = "ws://example.com";

// =============================================================================
// Logging
// =============================================================================

/// Output format selector: `json` (default) or `pretty`
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
