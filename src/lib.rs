//! WebSocket endpoint configuration
//!
//! Maps the deployment mode (`NODE_ENV`) to the WebSocket address a client
//! should connect to. Connecting is left to the caller.

pub mod config;
pub mod error;

pub use config::{
    global, load_from_env, load_from_env_file, resolve, resolve_with, DeployMode, ResolvedConfig,
};
pub use error::AppError;
