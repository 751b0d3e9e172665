//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 저장 문서와 1:1로 대응되는 데이터 구조체들을 포함합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! ├── models/       ← 외부 시스템 연동 모델 및 값 객체
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ## MongoDB 매핑
//!
//! 엔티티의 `id` 필드는 저장 시 문서의 `_id`로 옮겨집니다.
//! 변환은 [`crate::repositories::restaurants::MongoRestaurantStore`]가 담당합니다.

pub mod restaurants;

pub use restaurants::*;
