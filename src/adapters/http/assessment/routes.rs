//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_latest_assessment, process_question, AssessmentHandlers};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(process_question))
        .route("/latest", get(get_latest_assessment))
        .with_state(handlers)
}
