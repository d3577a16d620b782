use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use moka::future::Cache;
use std::time::Duration;

use super::notify_models::{Notification, NotificationStatus};
use super::notify_repository::NotifyRepository;
use crate::error::{AppError, Result};

const STATUS_CACHE_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// Service layer for notification scheduling and status tracking.
///
/// Statuses are cached in-process next to the Postgres rows so that the
/// hot `GET /notify/{id}` path usually avoids a round trip.
#[derive(Clone)]
pub struct NotifyService {
    repo: NotifyRepository,
    status_cache: Cache<i64, String>,
}

impl NotifyService {
    pub fn new(repo: NotifyRepository) -> Self {
        Self {
            repo,
            status_cache: Cache::builder()
                .time_to_live(STATUS_CACHE_TTL)
                .build(),
        }
    }

    pub async fn create_notification(
        &self,
        recipient_id: i64,
        date: &str,
        text: &str,
    ) -> Result<i64> {
        let date = parse_notify_date(date)?;
        let id = self.repo.create(recipient_id, date, text).await?;

        self.status_cache
            .insert(id, NotificationStatus::Pending.to_string())
            .await;

        Ok(id)
    }

    pub async fn get_notification_status(&self, id: i64) -> Result<String> {
        if let Some(status) = self.status_cache.get(&id).await {
            return Ok(status);
        }

        let status = self
            .repo
            .get_status(id)
            .await?
            .ok_or_else(|| AppError::NotFound("notify not found".to_string()))?;

        self.status_cache.insert(id, status.clone()).await;

        Ok(status)
    }

    pub async fn delete_notification(&self, id: i64) -> Result<()> {
        let rows_affected = self.repo.delete(id).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound("notify not found".to_string()));
        }

        self.status_cache.invalidate(&id).await;

        Ok(())
    }

    pub async fn update_notification_status(
        &self,
        id: i64,
        status: NotificationStatus,
    ) -> Result<()> {
        self.repo.update_status(id, status).await?;
        self.status_cache.insert(id, status.to_string()).await;

        Ok(())
    }

    pub async fn due_notifications(&self, now: DateTime<Utc>) -> Result<Vec<Notification>> {
        self.repo.find_due(now).await
    }
}

/// Parses the delivery date from the create request.
///
/// The canonical format is `YYYY-MM-DD HH:MM:SS`; the `T`-separated form
/// produced by HTML `datetime-local` inputs and a bare date (delivered at
/// midnight) are also accepted. All values are interpreted as UTC.
pub fn parse_notify_date(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| AppError::BadRequest(format!("invalid date format: {raw}")))?;

    Ok(naive.and_utc())
}
