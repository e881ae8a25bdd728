//! User repository for database operations

use chrono::Utc;
use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// A duplicate email surfaces as `DatabaseError::UniqueViolation`.
    pub async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, email, password_hash, full_name, role, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(new_user.role.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, role, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, role, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user together with everything hanging off it
    ///
    /// Removes the interests the user created, the interests on the user's
    /// assets, the assets, then the user row, all in one transaction.
    /// Returns `false` when no such user existed.
    pub async fn delete(&self, id: i64) -> DatabaseResult<bool> {
        info!("Deleting user {} and dependent rows", id);

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM trade_interests WHERE interested_user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            DELETE FROM trade_interests
            WHERE asset_id IN (SELECT id FROM energy_assets WHERE owner_id = ?)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM energy_assets WHERE owner_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
