//! Trade interest model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Trade interest entity, also the response shape
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeInterest {
    pub id: i64,
    pub asset_id: i64,
    pub interested_user_id: i64,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Interest status, set by the asset owner
///
/// Any value may follow any other; there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InterestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestStatus::Pending => "pending",
            InterestStatus::Accepted => "accepted",
            InterestStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for InterestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InterestStatus::Pending),
            "accepted" => Ok(InterestStatus::Accepted),
            "rejected" => Ok(InterestStatus::Rejected),
            _ => Err("Invalid status value".to_string()),
        }
    }
}

/// New interest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInterest {
    pub asset_id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Interest status update payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInterestStatus {
    pub status: String,
}
