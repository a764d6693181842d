//! `api` crate: HTTP REST API layer.
//!
//! Exposes:
//!   GET    /health
//!   POST   /api/v1/posts
//!   GET    /api/v1/posts?status={status}
//!   GET    /api/v1/posts/{id}
//!   GET    /api/v1/posts/{id}/actions
//!   POST   /api/v1/posts/{id}/transition
//!   POST   /api/v1/posts/{id}/generate
//!   POST   /api/v1/webhook
//!
//! The caller's role comes from the `x-user-role` header; authenticating it
//! is the host application's job.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/v1/posts",
            post(handlers::posts::create).get(handlers::posts::list),
        )
        .route("/api/v1/posts/:id", get(handlers::posts::get))
        .route("/api/v1/posts/:id/actions", get(handlers::posts::actions))
        .route("/api/v1/posts/:id/transition", post(handlers::posts::transition))
        .route("/api/v1/posts/:id/generate", post(handlers::posts::generate))
        .route("/api/v1/webhook", post(handlers::webhooks::handle_webhook))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await
}
