//! Repositories for database operations
//!
//! Each repository owns a handle to the pool. A connection is checked out
//! per statement (or per transaction) and returned on drop, whatever the
//! outcome of the query.

pub mod asset;
pub mod interest;
pub mod user;

pub use asset::AssetRepository;
pub use interest::InterestRepository;
pub use user::UserRepository;
