//! 레스토랑 프로필 서비스 백엔드
//!
//! 레스토랑 프로필 문서의 생성/조회/수정과, Clerk 세션 토큰으로 인증된 호출자에게
//! 오브젝트 스토리지 서명 업로드 URL을 발급하는 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **레스토랑 프로필**: 생성(이미 있으면 저장된 문서 반환), 조회, 수정
//! - **업로드 URL**: 호출자 전용 경로 `restaurants/{id}/images/{file}`에 대한 15분짜리 GCS V4 서명 URL
//! - **Clerk 인증**: JWKS 기반 RS256 세션 토큰 검증
//! - **MongoDB**: 레스토랑 문서 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────────────────┐
//! │ RestaurantRepository │ UploadAuthorizer  │ ← 규칙
//! └──────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐  ┌───────────────────────────────┐
//! │ RestaurantStore │  │ IdentityVerifier / UrlSigner  │ ← trait 경계
//! └─────────────────┘  └───────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//!       MongoDB           Clerk JWKS / GCS
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restaurant_service_backend::repositories::restaurants::{MongoRestaurantStore, RestaurantRepository};
//!
//! let repository = RestaurantRepository::new(Arc::new(MongoRestaurantStore::new(&database)));
//! let outcome = repository.create(restaurant).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod testing;
