//! Trade interest routes

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{JsonBody, Path},
    models::{InterestStatus, NewInterest, Role, TradeInterest, UpdateInterestStatus, User},
    permissions::require_role,
};

/// Express interest in someone else's asset
pub async fn create_interest(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    JsonBody(payload): JsonBody<NewInterest>,
) -> ApiResult<impl IntoResponse> {
    let asset = state
        .asset_repository
        .find_by_id(payload.asset_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

    if asset.owner_id == user.id {
        return Err(ApiError::BadRequest(
            "Cannot express interest in your own asset".to_string(),
        ));
    }

    let interest = state.interest_repository.create(user.id, &payload).await?;

    Ok((StatusCode::CREATED, Json(interest)))
}

/// Interests the caller has expressed
pub async fn list_my_interests(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<TradeInterest>>> {
    let interests = state.interest_repository.list_by_user(user.id).await?;
    Ok(Json(interests))
}

/// Interests on the calling producer's assets
pub async fn list_received_interests(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<TradeInterest>>> {
    require_role(&user, &[Role::Producer])?;

    let interests = state
        .interest_repository
        .list_received_by_owner(user.id)
        .await?;
    Ok(Json(interests))
}

/// Accept, reject or reset an interest; only the asset owner may do this
pub async fn update_interest_status(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(interest_id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateInterestStatus>,
) -> ApiResult<Json<TradeInterest>> {
    let not_found = || ApiError::NotFound("Interest not found".to_string());

    let interest = state
        .interest_repository
        .find_by_id(interest_id)
        .await?
        .ok_or_else(not_found)?;

    let asset = state.asset_repository.find_by_id(interest.asset_id).await?;
    if asset.is_none_or(|asset| asset.owner_id != user.id) {
        return Err(ApiError::Forbidden(
            "You are not allowed to modify this interest".to_string(),
        ));
    }

    let status: InterestStatus = payload.status.parse().map_err(ApiError::BadRequest)?;

    let updated = state
        .interest_repository
        .update_status(interest_id, status)
        .await?
        .ok_or_else(not_found)?;

    info!(
        "User {} set interest {} to {}",
        user.id,
        updated.id,
        status.as_str()
    );
    Ok(Json(updated))
}
