//! Request and response bodies for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{PipelineOutput, ProcessedQuestion, StageFailure};

/// Body of `POST /api/assessments`.
///
/// `options` is a JSON object of label to text; its key order is the
/// display order.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessQuestionRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default, with = "crate::domain::assessment::ordered")]
    pub options: Vec<(String, String)>,
}

/// A processed question as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub run_id: String,
    pub completed_at: String,
    pub result: PipelineOutput,
    pub failures: Vec<StageFailure>,
}

impl From<ProcessedQuestion> for AssessmentResponse {
    fn from(record: ProcessedQuestion) -> Self {
        Self {
            run_id: record.run_id.to_string(),
            completed_at: record.completed_at.to_rfc3339(),
            result: record.output,
            failures: record.failures,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
