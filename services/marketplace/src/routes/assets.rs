//! Energy asset routes

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{JsonBody, Path, Query},
    models::{AssetFilter, EnergyAsset, NewAsset, Role, UpdateAsset, User},
    permissions::{ensure_asset_owner, require_role},
    validation::validate_asset_update,
};

fn asset_not_found() -> ApiError {
    ApiError::NotFound("Asset not found".to_string())
}

/// Public asset listing with optional `asset_type` and `location` filters
pub async fn list_assets(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilter>,
) -> ApiResult<Json<Vec<EnergyAsset>>> {
    let assets = state.asset_repository.list(&filter).await?;
    Ok(Json(assets))
}

/// Get an asset by ID
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<i64>,
) -> ApiResult<Json<EnergyAsset>> {
    let asset = state
        .asset_repository
        .find_by_id(asset_id)
        .await?
        .ok_or_else(asset_not_found)?;

    Ok(Json(asset))
}

/// List a new asset, producers only
pub async fn create_asset(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    JsonBody(payload): JsonBody<NewAsset>,
) -> ApiResult<impl IntoResponse> {
    require_role(&user, &[Role::Producer])?;

    let asset = state.asset_repository.create(user.id, &payload).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// Partially update an asset, owner only
pub async fn update_asset(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(asset_id): Path<i64>,
    JsonBody(changes): JsonBody<UpdateAsset>,
) -> ApiResult<Json<EnergyAsset>> {
    let asset = state
        .asset_repository
        .find_by_id(asset_id)
        .await?
        .ok_or_else(asset_not_found)?;

    ensure_asset_owner(&user, &asset)?;
    validate_asset_update(&changes).map_err(ApiError::Validation)?;

    let updated = state
        .asset_repository
        .update(asset_id, &changes)
        .await?
        .ok_or_else(asset_not_found)?;

    Ok(Json(updated))
}

/// Assets owned by the calling producer
pub async fn list_my_assets(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<EnergyAsset>>> {
    require_role(&user, &[Role::Producer])?;

    let assets = state.asset_repository.list_by_owner(user.id).await?;
    Ok(Json(assets))
}
