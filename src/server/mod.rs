//! HTTP server setup and routing.

mod extractors;
mod mood;
mod page;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::pipeline::MoodPipeline;
use crate::sentiment::{LexiconAnalyzer, SentimentReader};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: MoodPipeline,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    /// Create state backed by the built-in lexicon engine
    pub fn new(config: AppConfig) -> Self {
        let reader = Arc::new(LexiconAnalyzer::new(&config.sentiment));
        Self::with_reader(config, reader)
    }

    /// Create state with a specific sentiment engine
    pub fn with_reader(config: AppConfig, reader: Arc<dyn SentimentReader>) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: MoodPipeline::new(reader),
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood classification endpoints
        .route("/mood/classify", post(mood::classify_mood))
        .route("/mood/list", get(mood::list_moods));

    Router::new()
        .route("/", get(page::form).post(page::submit))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
