//! Restaurants Entity Module
//!
//! 레스토랑 도메인의 유일한 엔티티인 [`Restaurant`](restaurant::Restaurant)를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::restaurants::Restaurant;
//!
//! let mut restaurant = Restaurant::with_id("user_2abcDEF");
//! restaurant.name = Some("Cafe".to_string());
//! ```

pub mod restaurant;

pub use restaurant::*;
