use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::notify_models::{Notification, NotificationStatus};
use crate::error::Result;

#[derive(Clone)]
pub struct NotifyRepository {
    pool: PgPool,
}

impl NotifyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        recipient_id: i64,
        date: DateTime<Utc>,
        text: &str,
    ) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO notifications (recipient_id, date, text) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(recipient_id)
        .bind(date)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    pub async fn get_status(&self, id: i64) -> Result<Option<String>> {
        let status: Option<(String,)> =
            sqlx::query_as("SELECT status FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(status.map(|(s,)| s))
    }

    pub async fn update_status(&self, id: i64, status: NotificationStatus) -> Result<u64> {
        let result = sqlx::query("UPDATE notifications SET status = $1 WHERE id = $2")
            .bind(status.to_string())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Pending notifications whose delivery time has passed, oldest first.
    pub async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE status = 'pending' AND date <= $1 ORDER BY date ASC",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }
}
