//! Role and ownership gates applied by handlers before they mutate anything

use crate::{
    error::ApiError,
    models::{EnergyAsset, Role, User},
};

/// Ensure the user holds one of the allowed roles
pub fn require_role(user: &User, allowed: &[Role]) -> Result<(), ApiError> {
    if allowed.iter().any(|role| user.has_role(*role)) {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Insufficient permissions".to_string()))
    }
}

/// Ensure the user owns the asset
pub fn ensure_asset_owner(user: &User, asset: &EnergyAsset) -> Result<(), ApiError> {
    if asset.owner_id == user.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You are not the owner of this asset".to_string(),
        ))
    }
}
