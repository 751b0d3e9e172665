//! # 업로드 인가 서비스
//!
//! 업로드 요청의 호출자를 확인하고, 호출자 전용 경로에 대한 서명 업로드 URL을 발급합니다.
//!
//! 오브젝트 경로는 항상 `restaurants/{callerId}/images/{fileName}` 형태이며,
//! `callerId`는 검증된 세션 토큰에서만 가져옵니다. 요청 본문으로 다른 레스토랑의 경로를 지정할 수 없습니다.

use std::sync::Arc;
use chrono::Duration;
use log::info;
use crate::{
    domain::models::storage::UploadTarget,
    errors::{AppError, AppResult},
    services::{auth::IdentityVerifier, storage::UploadUrlSigner},
    utils::string_utils::{sanitize_file_name, strip_bearer_prefix, validate_required_string},
};

/// 발급된 업로드 URL의 유효 기간 (분)
pub const UPLOAD_URL_TTL_MINUTES: i64 = 15;

/// 업로드 인가 서비스
pub struct UploadAuthorizer {
    verifier: Arc<dyn IdentityVerifier>,
    signer: Arc<dyn UploadUrlSigner>,
}

impl UploadAuthorizer {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, signer: Arc<dyn UploadUrlSigner>) -> Self {
        Self { verifier, signer }
    }

    /// Authorization 헤더 값으로 호출자를 확인하고 호출자 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 헤더 누락, 빈 토큰, 토큰 검증 실패
    pub async fn authorize(&self, authorization: Option<&str>) -> AppResult<String> {
        let header = authorization
            .ok_or_else(|| AppError::AuthenticationError("Missing Authorization header".to_string()))?;

        let token = strip_bearer_prefix(header)
            .ok_or_else(|| AppError::AuthenticationError("Empty bearer token".to_string()))?;

        self.verifier.verify(token).await
    }

    /// 호출자 전용 경로에 대한 업로드 URL을 발급합니다.
    ///
    /// `file_name`의 디렉터리 부분은 제거됩니다.
    pub async fn issue_upload_target(
        &self,
        caller_id: &str,
        file_name: &str,
        content_type: &str,
    ) -> AppResult<UploadTarget> {
        let caller_id = validate_required_string(caller_id, "Caller ID")?;
        let file_name = sanitize_file_name(file_name)?;
        let storage_path = format!("restaurants/{}/images/{}", caller_id, file_name);

        let signed = self.signer
            .sign_upload_url(&storage_path, content_type, Duration::minutes(UPLOAD_URL_TTL_MINUTES))
            .await?;

        info!("📤 업로드 URL 발급: {} (만료 {})", storage_path, signed.expires_at);

        Ok(UploadTarget {
            storage_path,
            upload_url: signed.url,
            expires_at: signed.expires_at,
        })
    }
}
