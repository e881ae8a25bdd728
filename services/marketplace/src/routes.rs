//! Marketplace routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use serde_json::json;

use crate::{AppState, middleware::auth_middleware};

pub mod assets;
pub mod auth;
pub mod interests;

/// Path prefix of the versioned API
pub const API_PREFIX: &str = "/api/v1";

/// Create the router for the marketplace service
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/assets", get(assets::list_assets))
        .route("/assets/", get(assets::list_assets))
        .route("/assets/:asset_id", get(assets::get_asset));

    let protected_routes = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/assets", post(assets::create_asset))
        .route("/assets/", post(assets::create_asset))
        .route("/assets/:asset_id", put(assets::update_asset))
        .route("/assets/owner/me", get(assets::list_my_assets))
        .route("/interests", post(interests::create_interest))
        .route("/interests/", post(interests::create_interest))
        .route("/interests/mine", get(interests::list_my_interests))
        .route("/interests/received", get(interests::list_received_interests))
        .route("/interests/:interest_id", patch(interests::update_interest_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, public_routes.merge(protected_routes))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
