//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API v1
        .nest("/api/v1", api_v1_routes())
        .fallback(routes::not_found)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/bonds/calculate", post(routes::bonds::calculate))
}

/// Run the server until Ctrl-C.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Bondcalc API Server listening on http://{}", addr);
    match state.config.valuation_date {
        Some(date) => tracing::info!("Calculation date pinned to {}", date),
        None => tracing::info!("Calculation date follows the current UTC date"),
    }
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/bonds/calculate");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutting down...");
}
