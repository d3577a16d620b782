use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotifyRequest {
    #[validate(range(min = 1))]
    pub recipient_id: i64,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1, max = 4096))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateNotifyResponse {
    pub status: String,
    pub notification_id: i64,
}

/// Body of `GET /notify/{id}`: the single `status` field carries the
/// notification's delivery status, not an OK/Error marker.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifyStatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    pub status: String,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}
