//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 레스토랑 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `UploadFailed` | 500 Internal Server Error |
//! | `DatabaseError` / `ExternalServiceError` / `ConfigError` / `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_restaurant(id: &str) -> Result<Restaurant, AppError> {
//!     if id.is_empty() {
//!         return Err(AppError::ValidationError("Restaurant ID is required".to_string()));
//!     }
//!
//!     repository.get(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("Restaurant {}", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
/// 협력 서비스(MongoDB, Clerk, Storage)의 에러 메시지는 가공 없이 그대로 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 업로드 URL 발급 실패 (500 Internal Server Error)
    ///
    /// 업로드 엔드포인트는 인증 실패와 서명 실패를 구분하지 않고 이 변형으로 응답합니다.
    #[error("Error uploading file: {0}")]
    UploadFailed(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 누락 또는 잘못된 설정값 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
