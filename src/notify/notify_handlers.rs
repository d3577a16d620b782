use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use super::notify_dto::{CreateNotifyRequest, CreateNotifyResponse, NotifyStatusResponse, OkResponse};
use crate::{error::Result, state::AppState};

/// Schedule a notification for delayed delivery
#[utoipa::path(
    post,
    path = "/notify",
    request_body = CreateNotifyRequest,
    responses(
        (status = 200, description = "Notification scheduled", body = CreateNotifyResponse),
        (status = 400, description = "Malformed body or invalid date"),
        (status = 500, description = "Storage failure")
    ),
    tag = "notify"
)]
pub async fn create_notify(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotifyRequest>,
) -> Result<Json<CreateNotifyResponse>> {
    payload.validate()?;

    let notification_id = state
        .notify_service
        .create_notification(payload.recipient_id, &payload.date, &payload.text)
        .await?;

    tracing::info!(notification_id, "notify added");

    Ok(Json(CreateNotifyResponse {
        status: "OK".to_string(),
        notification_id,
    }))
}

/// Get the delivery status of a notification
#[utoipa::path(
    get,
    path = "/notify/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Current status", body = NotifyStatusResponse),
        (status = 404, description = "Unknown notification ID")
    ),
    tag = "notify"
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NotifyStatusResponse>> {
    let status = state.notify_service.get_notification_status(id).await?;

    tracing::info!(notification_id = id, "notify status received");

    Ok(Json(NotifyStatusResponse { status }))
}

/// Cancel a scheduled notification
#[utoipa::path(
    delete,
    path = "/notify/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted", body = OkResponse),
        (status = 404, description = "Unknown notification ID")
    ),
    tag = "notify"
)]
pub async fn delete_notify(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>> {
    state.notify_service.delete_notification(id).await?;

    tracing::info!(notification_id = id, "notify deleted");

    Ok(Json(OkResponse::ok()))
}
