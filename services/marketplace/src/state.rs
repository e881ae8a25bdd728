//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::{
    jwt::JwtService,
    repositories::{AssetRepository, InterestRepository, UserRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub asset_repository: AssetRepository,
    pub interest_repository: InterestRepository,
}

impl AppState {
    /// Build the state around an open pool
    pub fn new(db_pool: SqlitePool, jwt_service: JwtService) -> Self {
        Self {
            user_repository: UserRepository::new(db_pool.clone()),
            asset_repository: AssetRepository::new(db_pool.clone()),
            interest_repository: InterestRepository::new(db_pool),
            jwt_service,
        }
    }
}
