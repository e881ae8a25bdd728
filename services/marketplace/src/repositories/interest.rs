//! Trade interest repository for database operations

use chrono::Utc;
use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{InterestStatus, NewInterest, TradeInterest};

/// Trade interest repository
#[derive(Clone)]
pub struct InterestRepository {
    pool: SqlitePool,
}

impl InterestRepository {
    /// Create a new interest repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record `user_id`'s interest in an asset, starting as pending
    pub async fn create(
        &self,
        user_id: i64,
        new_interest: &NewInterest,
    ) -> DatabaseResult<TradeInterest> {
        info!(
            "User {} expressing interest in asset {}",
            user_id, new_interest.asset_id
        );

        let interest = sqlx::query_as::<_, TradeInterest>(
            r#"
            INSERT INTO trade_interests (asset_id, interested_user_id, message, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, asset_id, interested_user_id, message, status, created_at
            "#,
        )
        .bind(new_interest.asset_id)
        .bind(user_id)
        .bind(&new_interest.message)
        .bind(InterestStatus::Pending.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(interest)
    }

    /// Get an interest by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<TradeInterest>> {
        let interest = sqlx::query_as::<_, TradeInterest>(
            r#"
            SELECT id, asset_id, interested_user_id, message, status, created_at
            FROM trade_interests
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(interest)
    }

    /// Interests created by a user
    pub async fn list_by_user(&self, user_id: i64) -> DatabaseResult<Vec<TradeInterest>> {
        let interests = sqlx::query_as::<_, TradeInterest>(
            r#"
            SELECT id, asset_id, interested_user_id, message, status, created_at
            FROM trade_interests
            WHERE interested_user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(interests)
    }

    /// Interests on any asset owned by `owner_id`, whoever created them
    pub async fn list_received_by_owner(
        &self,
        owner_id: i64,
    ) -> DatabaseResult<Vec<TradeInterest>> {
        let interests = sqlx::query_as::<_, TradeInterest>(
            r#"
            SELECT ti.id, ti.asset_id, ti.interested_user_id, ti.message, ti.status, ti.created_at
            FROM trade_interests ti
            JOIN energy_assets ea ON ea.id = ti.asset_id
            WHERE ea.owner_id = ?
            ORDER BY ti.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(interests)
    }

    /// Overwrite the status and read the row back
    pub async fn update_status(
        &self,
        id: i64,
        status: InterestStatus,
    ) -> DatabaseResult<Option<TradeInterest>> {
        info!("Setting interest {} to {}", id, status.as_str());

        let interest = sqlx::query_as::<_, TradeInterest>(
            r#"
            UPDATE trade_interests
            SET status = ?
            WHERE id = ?
            RETURNING id, asset_id, interested_user_id, message, status, created_at
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::repositories::testing;

    #[tokio::test]
    async fn test_create_starts_pending() {
        let pool = testing::pool().await;
        let owner = testing::user(&pool, "owner@example.com", Role::Producer).await;
        let buyer = testing::user(&pool, "buyer@example.com", Role::Consumer).await;
        let asset = testing::asset(&pool, owner.id, "solar", "Nairobi").await;

        let interest = InterestRepository::new(pool)
            .create(
                buyer.id,
                &NewInterest {
                    asset_id: asset.id,
                    message: Some("Interested in 10 kW".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(interest.status, "pending");
        assert_eq!(interest.interested_user_id, buyer.id);
        assert_eq!(interest.asset_id, asset.id);
    }

    #[tokio::test]
    async fn test_received_interests_follow_asset_ownership() {
        let pool = testing::pool().await;
        let producer = testing::user(&pool, "p@example.com", Role::Producer).await;
        let rival = testing::user(&pool, "r@example.com", Role::Producer).await;
        let consumer = testing::user(&pool, "c@example.com", Role::Consumer).await;
        let investor = testing::user(&pool, "i@example.com", Role::Investor).await;

        let mine = testing::asset(&pool, producer.id, "solar", "Nairobi").await;
        let theirs = testing::asset(&pool, rival.id, "wind", "Lamu").await;

        let repo = InterestRepository::new(pool);
        let a = repo
            .create(consumer.id, &NewInterest { asset_id: mine.id, message: None })
            .await
            .unwrap();
        let b = repo
            .create(investor.id, &NewInterest { asset_id: mine.id, message: None })
            .await
            .unwrap();
        repo.create(consumer.id, &NewInterest { asset_id: theirs.id, message: None })
            .await
            .unwrap();

        let received: Vec<i64> = repo
            .list_received_by_owner(producer.id)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(received, vec![a.id, b.id]);

        let by_consumer = repo.list_by_user(consumer.id).await.unwrap();
        assert_eq!(by_consumer.len(), 2);
        assert!(by_consumer.iter().all(|i| i.interested_user_id == consumer.id));
    }

    #[tokio::test]
    async fn test_update_status_any_direction() {
        let pool = testing::pool().await;
        let owner = testing::user(&pool, "owner@example.com", Role::Producer).await;
        let buyer = testing::user(&pool, "buyer@example.com", Role::Investor).await;
        let asset = testing::asset(&pool, owner.id, "wind", "Lamu").await;

        let repo = InterestRepository::new(pool);
        let interest = repo
            .create(buyer.id, &NewInterest { asset_id: asset.id, message: None })
            .await
            .unwrap();

        let accepted = repo
            .update_status(interest.id, InterestStatus::Accepted)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(accepted.status, "accepted");

        let back_to_pending = repo
            .update_status(interest.id, InterestStatus::Pending)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(back_to_pending.status, "pending");

        assert!(
            repo.update_status(interest.id + 1, InterestStatus::Rejected)
                .await
                .unwrap()
                .is_none()
        );
    }
}
