//! Middleware for bearer token authentication

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Resolve the bearer token to a stored user
///
/// On success the `User` is inserted into the request extensions for
/// handlers to pick up with `Extension<User>`. A bad signature, an expired
/// token, a non-numeric subject or a user that no longer exists all end in
/// the same 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or_else(ApiError::invalid_credentials)?;

    let claims = state
        .jwt_service
        .validate_token(bearer.token())
        .map_err(|e| {
            warn!("Failed to validate token: {}", e);
            ApiError::invalid_credentials()
        })?;

    let user_id = claims.user_id().ok_or_else(|| {
        warn!("Token subject is not a user id: {}", claims.sub);
        ApiError::invalid_credentials()
    })?;

    let user = state
        .user_repository
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| {
            warn!("Token subject {} no longer exists", user_id);
            ApiError::invalid_credentials()
        })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
