//! Marketplace models: stored rows and request/response payloads

pub mod asset;
pub mod interest;
pub mod user;

// Re-export for convenience
pub use asset::{AssetFilter, AssetStatus, EnergyAsset, NewAsset, UpdateAsset};
pub use interest::{InterestStatus, NewInterest, TradeInterest, UpdateInterestStatus};
pub use user::{LoginRequest, NewUser, RegisterRequest, Role, TokenResponse, User, UserResponse};
