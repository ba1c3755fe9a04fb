//! Nova API Server
//!
//! Agile-coaching transcript analysis: a domain gate that rejects off-topic
//! conversations and a classifier that recognizes the ceremony being held.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod report;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::StaticAntiPatternCatalog;
use app::AnalysisService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService<StaticAntiPatternCatalog>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Rate limiting keys on the peer IP, so it needs a
/// server started with connect info.
pub fn build_router(state: AppState, rate_limit: bool) -> anyhow::Result<Router> {
    let mut analysis_routes = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/analyze/context", post(handlers::analyze_context))
        .route("/analyze/workshop", post(handlers::analyze_workshop));

    if rate_limit {
        // Uses PeerIpKeyExtractor to get client IP from socket connection
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(state.config.rate_limit_per_second)
                .burst_size(state.config.rate_limit_burst)
                .finish()
                .context("Invalid rate limit settings")?,
        );
        analysis_routes = analysis_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        .route("/ceremonies", get(handlers::list_ceremonies))
        .route("/anti-patterns/:ceremony", get(handlers::get_anti_patterns))
        .merge(analysis_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nova_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Nova API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters and services
    let catalog = Arc::new(StaticAntiPatternCatalog::new());
    let analysis_service = Arc::new(AnalysisService::new(
        catalog,
        config.max_transcript_chars,
        config.anonymize_transcripts,
    ));

    let state = AppState {
        analysis_service,
        config: config.clone(),
    };

    let app = build_router(state, true)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
