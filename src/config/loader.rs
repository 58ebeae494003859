//! Configuration resolver
//!
//! This module maps the environment indicator to a `ResolvedConfig`.
//! [`resolve`] is a pure mapping with no logging; the others read the
//! indicator from somewhere, resolve it, and log the outcome.

use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{AppError, Result};

use super::constants::ENV_INDICATOR_VAR;
use super::types::{DeployMode, ResolvedConfig};

static GLOBAL_CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

/// Resolve the configuration from an indicator value
///
/// # Arguments
/// * `indicator` - Value of `NODE_ENV`, or `None` when it is not set
///
/// # Returns
/// A record whose `ws_url` is set for `"dev"` and `"prod"` and unset for
/// anything else. Never fails.
///
/// # Example
/// ```
/// use ws_config::config::resolve;
///
/// let config = resolve(Some("dev"));
/// assert_eq!(config.ws_url(), Some("ws://127.0.0.1:8080"));
/// assert!(resolve(Some("staging")).ws_url().is_none());
/// ```
pub fn resolve(indicator: Option<&str>) -> ResolvedConfig {
    ResolvedConfig::from_mode(indicator.and_then(DeployMode::from_indicator))
}

/// Resolve using an injected variable lookup
///
/// `lookup` is called exactly once, with the indicator variable name.
pub fn resolve_with<F>(lookup: F) -> ResolvedConfig
where
    F: FnOnce(&str) -> Option<String>,
{
    let indicator = lookup(ENV_INDICATOR_VAR);
    let config = resolve(indicator.as_deref());

    match (indicator.as_deref(), config.mode()) {
        (Some(value), None) => {
            warn!(indicator = %value, "Unrecognized {}, WebSocket URL left unset", ENV_INDICATOR_VAR);
        }
        (None, _) => {
            debug!("{} not set, WebSocket URL left unset", ENV_INDICATOR_VAR);
        }
        (Some(_), Some(mode)) => {
            debug!(mode = %mode, ws_url = mode.ws_url(), "WebSocket endpoint resolved");
        }
    }

    config
}

/// Resolve from the process environment
///
/// A value that is not valid unicode is treated as absent.
pub fn load_from_env() -> ResolvedConfig {
    resolve_with(|key| std::env::var(key).ok())
}

/// Resolve from a dotenv file without touching the process environment
///
/// A file with no indicator entry resolves to an unset address, same as a
/// missing variable. When the key appears more than once the first
/// assignment wins, matching how dotenvy loads files. Every line is parsed,
/// so a malformed line fails the load wherever it sits in the file.
///
/// # Returns
/// * `Ok(ResolvedConfig)` - File was read
/// * `Err(AppError)` - File not found or not valid dotenv syntax
pub fn load_from_env_file(path: &Path) -> Result<ResolvedConfig> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Environment file not found: {}",
            path.display()
        )));
    }

    let entries = dotenvy::from_path_iter(path).map_err(|e| {
        AppError::Config(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    let mut indicator = None;
    for entry in entries {
        let (key, value) = entry.map_err(|e| {
            AppError::Config(format!("Env file parse error in '{}': {}", path.display(), e))
        })?;
        if key == ENV_INDICATOR_VAR && indicator.is_none() {
            indicator = Some(value);
        }
    }

    Ok(resolve_with(move |_| indicator))
}

/// Process-wide configuration
///
/// Resolved from the process environment on first call; later calls return
/// the same record and never read the environment again.
pub fn global() -> &'static ResolvedConfig {
    GLOBAL_CONFIG.get_or_init(load_from_env)
}

// ============================================================================
// Tests
// ============================================================================
