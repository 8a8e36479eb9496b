//! Error types.
//!
//! Validation outcomes are plain booleans and never surface here. These
//! errors only cover loading configuration.

use thiserror::Error;

/// Errors that can occur when loading message configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was not valid JSON for the expected shape
    #[error("Failed to parse message configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configured message was blank
    #[error("Message for '{key}' must not be empty")]
    EmptyMessage { key: &'static str },
}
