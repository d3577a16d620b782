use chrono::{DateTime, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::error::Result;
use crate::notify::{Notification, NotificationStatus};
use crate::state::AppState;

/// Starts the delivery worker: a scheduler job that fires every minute and
/// pushes out every pending notification whose delivery time has passed.
pub async fn start_dispatch_worker(state: AppState) -> anyhow::Result<()> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _l| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = deliver_due_notifications(&state).await {
                error!("Error delivering notifications: {:?}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Dispatch worker started");
    Ok(())
}

async fn deliver_due_notifications(state: &AppState) -> Result<()> {
    let now = Utc::now();
    let due = state.notify_service.due_notifications(now).await?;

    // The query already selects on this predicate; filtering again keeps
    // the worker correct if a row's status changed between fetch and send.
    for notification in due.into_iter().filter(|n| is_due(n, now)) {
        let outcome = state
            .notifier
            .send_notification(notification.recipient_id, &notification.text)
            .await;

        let new_status = delivery_status(&outcome);

        if let Err(e) = &outcome {
            error!(
                notification_id = notification.id,
                "Failed to send message to Telegram: {e}"
            );
        } else {
            info!(
                notification_id = notification.id,
                recipient_id = notification.recipient_id,
                "Notification delivered"
            );
        }

        state
            .notify_service
            .update_notification_status(notification.id, new_status)
            .await?;
    }

    Ok(())
}

/// A notification is due once its delivery time has passed (inclusive)
/// and it has not already been sent, failed, or cancelled.
fn is_due(notification: &Notification, now: DateTime<Utc>) -> bool {
    notification.status == NotificationStatus::Pending.to_string() && notification.date <= now
}

fn delivery_status<T>(outcome: &Result<T>) -> NotificationStatus {
    if outcome.is_ok() {
        NotificationStatus::Sent
    } else {
        NotificationStatus::Failed
    }
}
