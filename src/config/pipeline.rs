//! Pipeline sampling configuration
//!
//! Defaults are the literal values the stages have always used:
//! temperature 0.5, top-p 1.0, and 500 / 300 / 500 output tokens for
//! generate / probe / synthesize.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::PROBE_QUESTIONS;
use crate::ports::SamplingParams;

/// Sampling parameters for each stage plus probe fan-out
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PipelineConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Output cap for the initial answer
    #[serde(default = "default_initial_max_tokens")]
    pub initial_max_tokens: u32,

    /// Output cap for each probe answer
    #[serde(default = "default_probe_max_tokens")]
    pub probe_max_tokens: u32,

    /// Output cap for the final assessment
    #[serde(default = "default_final_max_tokens")]
    pub final_max_tokens: u32,

    /// Probes in flight at once; 1 runs them one after another
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

impl PipelineConfig {
    pub fn initial_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.top_p, self.initial_max_tokens)
    }

    pub fn probe_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.top_p, self.probe_max_tokens)
    }

    pub fn final_params(&self) -> SamplingParams {
        SamplingParams::new(self.temperature, self.top_p, self.final_max_tokens)
    }

    /// Validate pipeline configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(ValidationError::InvalidTopP);
        }
        if self.initial_max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens("initial response"));
        }
        if self.probe_max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens("probes"));
        }
        if self.final_max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens("final assessment"));
        }
        if self.probe_concurrency == 0 || self.probe_concurrency > PROBE_QUESTIONS.len() {
            return Err(ValidationError::InvalidProbeConcurrency {
                max: PROBE_QUESTIONS.len(),
            });
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            initial_max_tokens: default_initial_max_tokens(),
            probe_max_tokens: default_probe_max_tokens(),
            final_max_tokens: default_final_max_tokens(),
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

fn default_temperature() -> f32 {
    0.5
}

fn default_top_p() -> f32 {
    1.0
}

fn default_initial_max_tokens() -> u32 {
    500
}

fn default_probe_max_tokens() -> u32 {
    300
}

fn default_final_max_tokens() -> u32 {
    500
}

fn default_probe_concurrency() -> usize {
    1
}
