//! # External Provider Configuration
//!
//! 외부 협력 서비스(Clerk 인증, Google Cloud Storage) 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! # Clerk Backend API 시크릿 키
//! export CLERK_SECRET_KEY="sk_test_..."
//!
//! # 업로드 대상 버킷
//! export FIREBASE_STORAGE_BUCKET="foodexpress.appspot.com"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export CLERK_JWKS_URL="https://api.clerk.com/v1/jwks"
//! export CLERK_AUTHORIZED_PARTIES="http://localhost:3000,https://foodexpress.app"
//! export GOOGLE_APPLICATION_CREDENTIALS="servicekey.json"
//! export STORAGE_HOST="storage.googleapis.com"
//! ```

use std::env;
use crate::config::parse_origins;
use crate::errors::{AppError, AppResult};

/// 필수 환경 변수를 읽습니다. 없거나 비어 있으면 `ConfigError`를 반환합니다.
fn required_var(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::ConfigError(format!("{} must be set", name))),
    }
}

/// Clerk 세션 토큰 검증 설정
pub struct ClerkConfig;

impl ClerkConfig {
    /// Clerk Backend API 시크릿 키
    ///
    /// JWKS 조회 시 Bearer 인증에 사용됩니다. 로그에 출력하지 마세요.
    pub fn secret_key() -> AppResult<String> {
        required_var("CLERK_SECRET_KEY")
    }

    /// 세션 토큰 서명 키를 제공하는 JWKS 엔드포인트
    pub fn jwks_url() -> String {
        env::var("CLERK_JWKS_URL")
            .unwrap_or_else(|_| "https://api.clerk.com/v1/jwks".to_string())
    }

    /// `azp` 클레임으로 허용할 origin 목록. 비어 있으면 `azp` 검사를 생략합니다.
    pub fn authorized_parties() -> Vec<String> {
        env::var("CLERK_AUTHORIZED_PARTIES")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default()
    }
}

/// 오브젝트 스토리지(Google Cloud Storage) 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 업로드 대상 버킷 이름
    pub fn bucket() -> AppResult<String> {
        required_var("FIREBASE_STORAGE_BUCKET")
    }

    /// 서비스 계정 키 JSON 파일 경로 (기본값: "servicekey.json")
    pub fn service_account_path() -> String {
        env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .unwrap_or_else(|_| "servicekey.json".to_string())
    }

    /// 서명 URL의 호스트 (기본값: "storage.googleapis.com")
    pub fn host() -> String {
        env::var("STORAGE_HOST").unwrap_or_else(|_| "storage.googleapis.com".to_string())
    }
}
