//! Energy asset model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Energy asset entity, also the response shape
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EnergyAsset {
    pub id: i64,
    pub owner_id: i64,
    pub asset_type: String,
    pub capacity_kw: f64,
    pub location: String,
    pub price_per_unit: f64,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Listing status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Active,
    Inactive,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AssetStatus::Active),
            "inactive" => Ok(AssetStatus::Inactive),
            other => Err(format!(
                "Invalid asset status '{}', expected active or inactive",
                other
            )),
        }
    }
}

/// New asset creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
    pub asset_type: String,
    pub capacity_kw: f64,
    pub location: String,
    pub price_per_unit: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Asset update payload
///
/// Absent fields are left untouched. `description` distinguishes an absent
/// key from an explicit `null`, which clears it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateAsset {
    pub asset_type: Option<String>,
    pub capacity_kw: Option<f64>,
    pub location: Option<String>,
    pub price_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
}

impl UpdateAsset {
    pub fn is_empty(&self) -> bool {
        self.asset_type.is_none()
            && self.capacity_kw.is_none()
            && self.location.is_none()
            && self.price_per_unit.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query filters for asset listing, AND'ed when both are given
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFilter {
    pub asset_type: Option<String>,
    pub location: Option<String>,
}
