//! HTTP adapters - REST API implementations.
//!
//! Assessment endpoints live under `/api/assessments`; `/health` answers
//! without touching the pipeline.

pub mod assessment;

use axum::{routing::get, Json, Router};

pub use assessment::{assessment_routes, AssessmentHandlers};
use assessment::HealthResponse;

/// Full API router, without middleware layers.
pub fn api_router(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .nest("/api/assessments", assessment_routes(handlers))
        .route("/health", get(health))
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
