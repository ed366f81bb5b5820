//! Configuration errors.

use thiserror::Error;

/// Errors raised when a slider configuration cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting is NaN or infinite.
    #[error("'{field}' must be finite, got {value}")]
    NotFinite {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The domain is empty or inverted.
    #[error("min ({min}) must be less than max ({max})")]
    EmptyDomain { min: f64, max: f64 },

    /// A step setting is zero or negative.
    #[error("'{field}' must be greater than zero, got {value}")]
    NonPositiveStep { field: &'static str, value: f64 },

    /// The configuration source could not be parsed.
    #[error("invalid slider config: {0}")]
    Parse(#[from] serde_json::Error),
}
