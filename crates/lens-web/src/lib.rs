//! Marketlens Web Server
//!
//! Axum-based server for the market data API and the dashboard page.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use lens_core::TextGenerator;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/market-data", get(routes::market::market_data))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(generator: Arc<dyn TextGenerator>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(generator);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
