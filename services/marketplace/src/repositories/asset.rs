//! Energy asset repository for database operations

use chrono::Utc;
use common::error::DatabaseResult;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

use crate::models::{AssetFilter, AssetStatus, EnergyAsset, NewAsset, UpdateAsset};

const ASSET_COLUMNS: &str =
    "id, owner_id, asset_type, capacity_kw, location, price_per_unit, description, status, created_at";

/// Energy asset repository
#[derive(Clone)]
pub struct AssetRepository {
    pool: SqlitePool,
}

impl AssetRepository {
    /// Create a new asset repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new asset owned by `owner_id`, listed as active
    pub async fn create(&self, owner_id: i64, new_asset: &NewAsset) -> DatabaseResult<EnergyAsset> {
        info!(
            "Creating {} asset for owner {}",
            new_asset.asset_type, owner_id
        );

        let asset = sqlx::query_as::<_, EnergyAsset>(
            r#"
            INSERT INTO energy_assets
                (owner_id, asset_type, capacity_kw, location, price_per_unit, description, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, owner_id, asset_type, capacity_kw, location, price_per_unit, description, status, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&new_asset.asset_type)
        .bind(new_asset.capacity_kw)
        .bind(&new_asset.location)
        .bind(new_asset.price_per_unit)
        .bind(&new_asset.description)
        .bind(AssetStatus::Active.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(asset)
    }

    /// Get an asset by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<EnergyAsset>> {
        let asset = sqlx::query_as::<_, EnergyAsset>(
            r#"
            SELECT id, owner_id, asset_type, capacity_kw, location, price_per_unit, description, status, created_at
            FROM energy_assets
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    /// List assets matching every given filter
    ///
    /// Filters are exact matches; missing or empty filters are ignored.
    pub async fn list(&self, filter: &AssetFilter) -> DatabaseResult<Vec<EnergyAsset>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(ASSET_COLUMNS);
        builder.push(" FROM energy_assets WHERE 1 = 1");

        if let Some(asset_type) = filter.asset_type.as_deref().filter(|v| !v.is_empty()) {
            builder.push(" AND asset_type = ").push_bind(asset_type);
        }
        if let Some(location) = filter.location.as_deref().filter(|v| !v.is_empty()) {
            builder.push(" AND location = ").push_bind(location);
        }
        builder.push(" ORDER BY id");

        let assets = builder
            .build_query_as::<EnergyAsset>()
            .fetch_all(&self.pool)
            .await?;

        Ok(assets)
    }

    /// List the assets owned by a user
    pub async fn list_by_owner(&self, owner_id: i64) -> DatabaseResult<Vec<EnergyAsset>> {
        let assets = sqlx::query_as::<_, EnergyAsset>(
            r#"
            SELECT id, owner_id, asset_type, capacity_kw, location, price_per_unit, description, status, created_at
            FROM energy_assets
            WHERE owner_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// Apply the fields present in `changes` and read the row back
    ///
    /// Returns `None` when the asset does not exist.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateAsset,
    ) -> DatabaseResult<Option<EnergyAsset>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        info!("Updating asset {}", id);

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE energy_assets SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(asset_type) = &changes.asset_type {
                set.push("asset_type = ").push_bind_unseparated(asset_type);
            }
            if let Some(capacity_kw) = changes.capacity_kw {
                set.push("capacity_kw = ").push_bind_unseparated(capacity_kw);
            }
            if let Some(location) = &changes.location {
                set.push("location = ").push_bind_unseparated(location);
            }
            if let Some(price_per_unit) = changes.price_per_unit {
                set.push("price_per_unit = ").push_bind_unseparated(price_per_unit);
            }
            if let Some(description) = &changes.description {
                set.push("description = ").push_bind_unseparated(description);
            }
            if let Some(status) = &changes.status {
                set.push("status = ").push_bind_unseparated(status);
            }
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(ASSET_COLUMNS);

        let asset = builder
            .build_query_as::<EnergyAsset>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }
}
