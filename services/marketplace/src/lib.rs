//! Renewable energy marketplace service
//!
//! Producers list energy assets, other users register trade interest in
//! them, and producers accept or reject that interest. Everything is served
//! as JSON over HTTP from a single SQLite database.

pub mod config;
pub mod error;
pub mod extract;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod permissions;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod state;
pub mod validation;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

pub use crate::state::AppState;
use crate::config::AppConfig;

/// Assemble the full application: API routes, optional static frontend,
/// CORS and request tracing
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let mut app = routes::create_router(state);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving frontend bundle from {}", static_dir);
        app = app.fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true));
    }

    // Development stance: every origin is allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors).layer(TraceLayer::new_for_http())
}
