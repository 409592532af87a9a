//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::assessment::{
    GetLatestAssessmentHandler, ProcessQuestionCommand, ProcessQuestionError,
    ProcessQuestionHandler,
};
use crate::ports::AssessmentStoreError;

use super::dto::{AssessmentResponse, ErrorResponse, ProcessQuestionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    process_handler: Arc<ProcessQuestionHandler>,
    latest_handler: Arc<GetLatestAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        process_handler: Arc<ProcessQuestionHandler>,
        latest_handler: Arc<GetLatestAssessmentHandler>,
    ) -> Self {
        Self {
            process_handler,
            latest_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Run the pipeline for one question
///
/// Blocks until all ten remote calls have settled.
pub async fn process_question(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<ProcessQuestionRequest>,
) -> Response {
    let cmd = ProcessQuestionCommand {
        question: req.question,
        options: req.options,
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(record) => {
            let response: AssessmentResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_process_error(e),
    }
}

/// GET /api/assessments/latest - Most recent processed question
pub async fn get_latest_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.latest_handler.handle().await {
        Ok(Some(record)) => {
            let response: AssessmentResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("No question has been processed yet")),
        )
            .into_response(),
        Err(e) => handle_store_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_process_error(error: ProcessQuestionError) -> Response {
    match error {
        ProcessQuestionError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        ProcessQuestionError::Store(e) => handle_store_error(e),
    }
}

fn handle_store_error(error: AssessmentStoreError) -> Response {
    error!(error = %error, "Assessment store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal(error.to_string())),
    )
        .into_response()
}
