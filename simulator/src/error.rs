//! Error handling for the apple farm simulator

use thiserror::Error;

/// Simulator error types
///
/// Stage functions never fail for in-range inputs; errors only arise while
/// loading or validating configuration.
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Result type alias for the simulator
pub type FarmResult<T> = Result<T, FarmError>;
