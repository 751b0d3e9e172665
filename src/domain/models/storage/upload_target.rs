//! 업로드 대상 모델
//!
//! 오브젝트 스토리지 서명기가 발급한 URL과, 업로드 인가 결과를 표현합니다.

use chrono::{DateTime, Utc};

/// 서명기가 발급한 시간 제한 업로드 URL
#[derive(Debug, Clone, PartialEq)]
pub struct SignedUploadUrl {
    /// 클라이언트가 파일을 직접 `PUT`할 URL
    pub url: String,
    /// URL 만료 시각 (스토리지 제공자가 강제)
    pub expires_at: DateTime<Utc>,
}

/// 업로드 인가 결과
///
/// 이 서비스는 URL만 발급하며, 실제 파일 전송은 클라이언트가 URL로 직접 수행합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTarget {
    /// 버킷 내 오브젝트 경로 (`restaurants/{callerId}/images/{fileName}`)
    pub storage_path: String,
    pub upload_url: String,
    pub expires_at: DateTime<Utc>,
}
