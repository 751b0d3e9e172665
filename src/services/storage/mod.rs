//! 오브젝트 스토리지 업로드 서비스 모듈
//!
//! - [`gcs_signer`] - Google Cloud Storage V4 서명 URL 생성
//! - [`upload_service`] - 호출자 확인 후 호출자 전용 경로의 업로드 URL 발급
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::storage::UploadAuthorizer;
//!
//! let caller_id = authorizer.authorize(Some("Bearer eyJ...")).await?;
//! let target = authorizer.issue_upload_target(&caller_id, "logo.png", "image/png").await?;
//! ```

pub mod gcs_signer;
pub mod upload_service;

pub use gcs_signer::*;
pub use upload_service::*;
