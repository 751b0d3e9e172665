//! 업로드 URL 발급 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::storage::UploadTarget;

/// `POST /storage/upload` 성공 응답
///
/// ```json
/// {
///   "uploadUrl": "https://storage.googleapis.com/bucket/restaurants/user_2abc/images/photo.png?X-Goog-Algorithm=...",
///   "storagePath": "restaurants/user_2abc/images/photo.png",
///   "expiresAt": "2024-05-01T12:15:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub storage_path: String,
    pub expires_at: DateTime<Utc>,
}

impl From<UploadTarget> for UploadUrlResponse {
    fn from(target: UploadTarget) -> Self {
        Self {
            upload_url: target.upload_url,
            storage_path: target.storage_path,
            expires_at: target.expires_at,
        }
    }
}
