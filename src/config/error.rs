//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout of {actual}s is shorter than a full pipeline run ({required}s)")]
    RequestTimeoutTooShort { required: u64, actual: u64 },

    #[error("Invalid AI base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("AI model identifier cannot be empty")]
    EmptyModel,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("top_p must be greater than 0.0 and at most 1.0")]
    InvalidTopP,

    #[error("Max tokens for {0} must be greater than zero")]
    InvalidMaxTokens(&'static str),

    #[error("Probe concurrency must be between 1 and {max}")]
    InvalidProbeConcurrency { max: usize },
}
