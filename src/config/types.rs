//! Configuration types for the WebSocket endpoint
//!
//! `DeployMode` is the typed form of a recognized environment indicator and
//! `ResolvedConfig` is the record handed to whatever opens the connection.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::constants::{DEV_INDICATOR, DEV_WS_URL, PROD_INDICATOR, PROD_WS_URL};

// ============================================================================
// Enums
// ============================================================================

/// Recognized deployment modes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    Dev,
    Prod,
}

impl DeployMode {
    /// Parse an indicator value. Matching is exact: `"DEV"` or `" dev"` do
    /// not match anything.
    pub fn from_indicator(indicator: &str) -> Option<Self> {
        match indicator {
            DEV_INDICATOR => Some(DeployMode::Dev),
            PROD_INDICATOR => Some(DeployMode::Prod),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployMode::Dev => DEV_INDICATOR,
            DeployMode::Prod => PROD_INDICATOR,
        }
    }

    /// WebSocket address served in this mode
    pub fn ws_url(&self) -> &'static str {
        match self {
            DeployMode::Dev => DEV_WS_URL,
            DeployMode::Prod => PROD_WS_URL,
        }
    }
}

impl std::fmt::Display for DeployMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Resolved endpoint configuration
///
/// Built once from the environment indicator and never mutated. An
/// unrecognized or missing indicator leaves `ws_url` unset; deciding whether
/// that is fatal is up to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(skip)]
    mode: Option<DeployMode>,
    /// WebSocket endpoint address, if the indicator was recognized
    ws_url: Option<String>,
}

impl ResolvedConfig {
    pub(crate) fn from_mode(mode: Option<DeployMode>) -> Self {
        Self {
            mode,
            ws_url: mode.map(|m| m.ws_url().to_string()),
        }
    }

    pub fn mode(&self) -> Option<DeployMode> {
        self.mode
    }

    pub fn ws_url(&self) -> Option<&str> {
        self.ws_url.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.ws_url.is_some()
    }

    /// Return the address or a config error, for consumers that cannot run
    /// without one.
    pub fn require_ws_url(&self) -> Result<&str> {
        self.ws_url().ok_or_else(|| {
            AppError::Config(format!(
                "WebSocket URL is not configured (expected NODE_ENV to be '{}' or '{}')",
                DEV_INDICATOR, PROD_INDICATOR
            ))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
