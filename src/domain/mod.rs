//! # Domain Layer
//!
//! 레스토랑 백엔드의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← Restaurant 엔티티
//! ├── models/     ← 세션 클레임, 업로드 대상
//! └── dto/        ← HTTP 응답 전용 구조체
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::restaurants::Restaurant;
pub use dto::storage::UploadUrlResponse;
pub use models::session::SessionClaims;
pub use models::storage::{SignedUploadUrl, UploadTarget};
