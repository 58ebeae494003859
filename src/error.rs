//! Application-wide error types using thiserror
//!
//! Resolution itself never fails; these errors come from loading an
//! indicator out of a dotenv file or from consumers that require an address.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
