//! # Data Transfer Objects
//!
//! HTTP 계층에서만 사용하는 요청/응답 구조체입니다.
//! 레스토랑 API는 엔티티를 그대로 주고받으므로 별도 DTO가 없고,
//! 업로드 응답만 이 모듈에 정의됩니다.
//!
//! ```text
//! dto/
//! └── storage/
//!     └── upload_response.rs
//! ```

pub mod storage;

pub use storage::*;
