//! Error types for configuration loading.
use thiserror::Error;

/// Errors raised while reading editor configuration.
///
/// Editing itself is infallible; only configuration input can be rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Value for {key} must be at least {min}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: String,
        min: String,
    },
}
