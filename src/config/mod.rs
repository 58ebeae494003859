//! Configuration module for the WebSocket endpoint
//!
//! This module provides:
//! - The deployment mode parsed from the environment indicator (`DeployMode`)
//! - The immutable resolved record (`ResolvedConfig`)
//! - Resolver functions (`resolve`, `resolve_with`, `load_from_env`, `global`)
//! - Logging setup with environment variable overrides

pub mod constants;
pub mod logging;
mod loader;
mod types;

// Re-export types
pub use types::{DeployMode, ResolvedConfig};

// Re-export loader functions
pub use loader::{global, load_from_env, load_from_env_file, resolve, resolve_with};
