//! # Domain Models Module
//!
//! 엔티티가 아닌 도메인 모델과 외부 시스템 연동 모델을 정의합니다.
//!
//! - [`session`] - Clerk 세션 토큰 클레임
//! - [`storage`] - 서명 업로드 URL과 업로드 대상

pub mod session;
pub mod storage;

pub use session::*;
pub use storage::*;
