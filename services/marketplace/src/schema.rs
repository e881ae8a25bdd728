//! Marketplace table definitions
//!
//! Applied with `common::database::apply_schema` on every start. Every
//! statement is create-if-missing; there are no incremental migrations.

use common::database::apply_schema;
use common::error::DatabaseResult;
use sqlx::SqlitePool;

pub const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        full_name TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS energy_assets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        asset_type TEXT NOT NULL,
        capacity_kw REAL NOT NULL,
        location TEXT NOT NULL,
        price_per_unit REAL NOT NULL,
        description TEXT,
        status TEXT NOT NULL DEFAULT 'active',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS trade_interests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        asset_id INTEGER NOT NULL REFERENCES energy_assets (id) ON DELETE CASCADE,
        interested_user_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        message TEXT,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_energy_assets_owner_id ON energy_assets (owner_id)",
    "CREATE INDEX IF NOT EXISTS idx_trade_interests_asset_id ON trade_interests (asset_id)",
    "CREATE INDEX IF NOT EXISTS idx_trade_interests_interested_user_id ON trade_interests (interested_user_id)",
];

/// Create the marketplace tables if they are missing
pub async fn init_schema(pool: &SqlitePool) -> DatabaseResult<()> {
    apply_schema(pool, STATEMENTS).await
}
