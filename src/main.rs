//! Clinical Probe server binary.
//!
//! Loads configuration from the environment, wires the completion provider
//! into the pipeline, and serves the HTTP API.

use std::sync::Arc;

use http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use clinical_probe::adapters::ai::{OpenAIConfig, OpenAIProvider};
use clinical_probe::adapters::http::{api_router, AssessmentHandlers};
use clinical_probe::adapters::storage::InMemoryAssessmentStore;
use clinical_probe::application::{
    AssessmentPipeline, GetLatestAssessmentHandler, ProcessQuestionHandler,
};
use clinical_probe::config::{AppConfig, ConfigError, LogFormat, ServerConfig};
use clinical_probe::ports::{AIError, AIProvider, AssessmentStore};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build completion client: {0}")]
    Provider(#[from] AIError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate().map_err(ConfigError::from)?;

    let provider = OpenAIProvider::new(OpenAIConfig::from(&config.ai))?;
    if !provider.has_api_key() {
        warn!("No API key configured; every completion will fall back to the default text");
    }
    info!(
        model = %config.ai.model,
        base_url = %config.ai.base_url,
        probe_concurrency = config.pipeline.probe_concurrency,
        "Completion provider ready"
    );
    let provider: Arc<dyn AIProvider> = Arc::new(provider);
    let store: Arc<dyn AssessmentStore> = Arc::new(InMemoryAssessmentStore::new());

    let pipeline = AssessmentPipeline::from_config(provider, &config.pipeline);
    let handlers = AssessmentHandlers::new(
        Arc::new(ProcessQuestionHandler::new(pipeline, store.clone())),
        Arc::new(GetLatestAssessmentHandler::new(store)),
    );

    let app = api_router(handlers)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Starting HTTP server");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if server.cors_allows_any_origin() {
        layer.allow_origin(Any)
    } else {
        if origins.is_empty() {
            warn!("No CORS origins configured in production; cross-origin requests are refused");
        }
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
