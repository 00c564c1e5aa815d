//! Triage API Server
//!
//! REST API over the triage engine.

use anyhow::{anyhow, Context};
use axum::{extract::State, response::IntoResponse, routing::get, routing::post, Json, Router};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use triage_kb::RuleCatalog;

mod settings;
mod error;
mod routes;

pub use settings::ApiConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::symptoms::SymptomsResponse;
pub use routes::triage::{TriageRequest, TriageResponse};

/// Application state shared across handlers
pub struct AppState {
    /// Read-only rule catalog
    pub catalog: Arc<RuleCatalog>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Prometheus exporter handle
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Arc<RuleCatalog>, metrics: PrometheusHandle) -> Self {
        Self {
            catalog,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            metrics,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub symptom_count: usize,
    pub rule_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/symptoms", get(routes::symptoms::list_symptoms))
        .route("/api/v1/triage", post(routes::triage::assess))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        symptom_count: state.catalog.symptom_count(),
        rule_count: state.catalog.rule_count(),
    })
}

/// Prometheus scrape handler
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.metrics.render()
}

/// Initialize logging
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        warn!("Logging already initialised: {}", e);
    }
}

/// Run the server
pub async fn run_server(config: ApiConfig) -> anyhow::Result<()> {
    let catalog = config
        .kb
        .load()
        .context("Failed to load triage knowledge base")?;

    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    metrics::set_global_recorder(recorder)
        .map_err(|_| anyhow!("Metrics recorder already installed"))?;

    let state = Arc::new(AppState::new(Arc::new(catalog), handle));
    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
