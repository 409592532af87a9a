//! Pipeline results and the failure records that travel beside them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProbingResult;

/// Text substituted for any stage output whose remote call failed.
pub const NO_VALID_RESPONSE: &str = "No valid response generated.";

/// Which of the three stages a remote call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Generate,
    Probe,
    Synthesize,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StageKind::Generate => "generate",
            StageKind::Probe => "probe",
            StageKind::Synthesize => "synthesize",
        };
        write!(f, "{}", s)
    }
}

/// Everything one pipeline run hands to the presentation layer.
///
/// Field names serialize to the labels the results view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Initial Response")]
    pub initial_response: String,
    #[serde(rename = "Probing Questions and Answers")]
    pub probing_results: ProbingResult,
    #[serde(rename = "Final Assessment")]
    pub final_assessment: String,
}

/// A remote call that fell back to [`NO_VALID_RESPONSE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFailure {
    pub stage: StageKind,
    /// Probe text, for failures in the probing stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<String>,
    /// Stable error code, e.g. `authentication_failed`.
    pub code: String,
    pub message: String,
}

impl StageFailure {
    pub fn new(
        stage: StageKind,
        probe: Option<&str>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            probe: probe.map(str::to_string),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A stage's settled value plus any calls that degraded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport<T> {
    pub value: T,
    pub failures: Vec<StageFailure>,
}

impl<T> StageReport<T> {
    pub fn with_failures(value: T, failures: Vec<StageFailure>) -> Self {
        Self { value, failures }
    }
}

/// The record kept in the most-recent-result slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedQuestion {
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub output: PipelineOutput,
    pub failures: Vec<StageFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> PipelineOutput {
        PipelineOutput {
            question: "Patient presents with fever and rash".to_string(),
            initial_response: "A".to_string(),
            probing_results: [("Why?", "Koplik spots")].into_iter().collect(),
            final_assessment: "A: Measles".to_string(),
        }
    }

    #[test]
    fn output_serializes_with_display_labels() {
        let json = serde_json::to_string(&sample_output()).unwrap();
        assert_eq!(
            json,
            r#"{"Question":"Patient presents with fever and rash","Initial Response":"A","Probing Questions and Answers":{"Why?":"Koplik spots"},"Final Assessment":"A: Measles"}"#
        );
    }

    #[test]
    fn output_roundtrips_through_json() {
        let output = sample_output();
        let json = serde_json::to_string(&output).unwrap();
        let back: PipelineOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn stage_kind_displays_snake_case() {
        assert_eq!(StageKind::Generate.to_string(), "generate");
        assert_eq!(StageKind::Probe.to_string(), "probe");
        assert_eq!(
            serde_json::to_string(&StageKind::Synthesize).unwrap(),
            "\"synthesize\""
        );
    }

    #[test]
    fn stage_failure_omits_probe_outside_probing() {
        let failure = StageFailure::new(StageKind::Generate, None, "network", "down");
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("probe").is_none());
        assert_eq!(json["code"], "network");
    }

    #[test]
    fn stage_report_carries_failures() {
        let failure = StageFailure::new(StageKind::Probe, Some("Why?"), "timeout", "slow");
        let report = StageReport::with_failures(NO_VALID_RESPONSE, vec![failure.clone()]);
        assert_eq!(report.value, NO_VALID_RESPONSE);
        assert_eq!(report.failures, vec![failure]);
    }
}
