//! Hacktoberfest Stats API
//!
//! Serves mock event statistics, a contributor leaderboard and the list of
//! participating projects as JSON. All data is either generated per request
//! or read from an immutable in-memory catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod middleware;

#[cfg(test)]
mod test_utils;


use adapters::StaticCatalog;
use app::{CatalogService, StatsRanges, StatsService};
use config::Config;
use domain::ports::CatalogRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<StatsService>,
    pub catalog_service: Arc<CatalogService<dyn CatalogRepository>>,
    pub config: Config,
}

/// GET route whose other methods fall through to the 404 handler
fn read_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::not_found)
}

/// Build the router with its full middleware stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", read_only(handlers::health))
        .route("/api/stats", read_only(handlers::get_stats))
        .route("/api/contributors", read_only(handlers::list_contributors))
        .route("/api/projects", read_only(handlers::list_projects))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::expose_error_details,
        ))
        // Baseline hardening headers
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hacktoberfest_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let catalog: Arc<dyn CatalogRepository> =
        Arc::new(StaticCatalog::seeded().context("Failed to build demo catalog")?);

    let ranges = StatsRanges::standard().context("Invalid stats ranges")?;

    let state = AppState {
        stats_service: Arc::new(StatsService::new(ranges)),
        catalog_service: Arc::new(CatalogService::new(catalog)),
        config: config.clone(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("🎃 Hacktoberfest 2025 API running on port {}", config.port);
    tracing::info!("🌍 Environment: {}", config.environment);
    tracing::info!(
        "🚀 Health check: http://localhost:{}/health",
        config.port
    );

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
