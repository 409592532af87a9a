//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLINICAL_PROBE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use clinical_probe::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod pipeline;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use pipeline::PipelineConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

use crate::domain::assessment::PROBE_QUESTIONS;

/// Model calls in one run: the initial answer, each probe, the final assessment.
const REMOTE_CALLS_PER_RUN: u64 = PROBE_QUESTIONS.len() as u64 + 2;

/// Variable consulted when `CLINICAL_PROBE__AI__API_KEY` is unset.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// (if unauthenticated) service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion service configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Stage sampling parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLINICAL_PROBE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to plain `API_KEY` for the completion service key
    ///
    /// # Environment Variable Format
    ///
    /// - `CLINICAL_PROBE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CLINICAL_PROBE__PIPELINE__PROBE_CONCURRENCY=4` -> `pipeline.probe_concurrency = 4`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLINICAL_PROBE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.ai = config
            .ai
            .with_fallback_key(std::env::var(FALLBACK_API_KEY_VAR).ok());

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.pipeline.validate()?;

        let required = self.ai.timeout_secs * REMOTE_CALLS_PER_RUN;
        if self.server.request_timeout_secs < required {
            return Err(ValidationError::RequestTimeoutTooShort {
                required,
                actual: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CLINICAL_PROBE__SERVER__PORT",
        "CLINICAL_PROBE__SERVER__ENVIRONMENT",
        "CLINICAL_PROBE__SERVER__LOG_FORMAT",
        "CLINICAL_PROBE__AI__API_KEY",
        "CLINICAL_PROBE__AI__MODEL",
        "CLINICAL_PROBE__PIPELINE__PROBE_CONCURRENCY",
        "API_KEY",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.pipeline, PipelineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("CLINICAL_PROBE__SERVER__PORT", "3000"),
            ("CLINICAL_PROBE__SERVER__LOG_FORMAT", "json"),
            ("CLINICAL_PROBE__AI__MODEL", "meta/llama-3.1-8b-instruct"),
            ("CLINICAL_PROBE__PIPELINE__PROBE_CONCURRENCY", "4"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.ai.model, "meta/llama-3.1-8b-instruct");
        assert_eq!(config.pipeline.probe_concurrency, 4);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("CLINICAL_PROBE__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.server.is_production());
    }

    #[test]
    fn test_prefixed_key_wins_over_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("CLINICAL_PROBE__AI__API_KEY", "nvapi-prefixed"),
            ("API_KEY", "nvapi-plain"),
        ])
        .unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("nvapi-prefixed"));
    }

    #[test]
    fn test_plain_api_key_is_used_as_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("API_KEY", "nvapi-plain")]).unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("nvapi-plain"));
    }

    #[test]
    fn test_defaults_leave_room_for_a_full_run() {
        let config = AppConfig::default();
        assert!(config.server.request_timeout_secs >= 10 * config.ai.timeout_secs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_request_timeout_shorter_than_run_is_rejected() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 120;
        config.server.request_timeout_secs = 900;

        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutTooShort {
                required: 1200,
                actual: 900,
            })
        );

        config.server.request_timeout_secs = 1200;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_concurrency_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("CLINICAL_PROBE__PIPELINE__PROBE_CONCURRENCY", "9")]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProbeConcurrency { max: 8 })
        ));
    }
}
