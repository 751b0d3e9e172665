//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 역직렬화하고, 리포지토리나 업로드 서비스에 위임한 뒤,
//! 결과를 상태 코드로 변환하는 일만 합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   RestaurantRepository / UploadAuthorizer
//! ├─────────────────────────────────────────────┤
//!   RestaurantStore / IdentityVerifier / UploadUrlSigner
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`restaurants`**: 레스토랑 프로필 생성/조회/수정
//! - **`storage`**: 서명 업로드 URL 발급
//!
//! 에러는 모두 [`AppError`](crate::errors::AppError)로 반환되어
//! `{ "error": "<message>" }` JSON 응답으로 변환됩니다.

pub mod restaurants;
pub mod storage;
