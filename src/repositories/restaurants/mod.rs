//! 레스토랑 데이터 액세스 계층
//!
//! - [`restaurant_store`] - 저장소 경계 trait과 MongoDB 구현
//! - [`restaurant_repo`] - 생성/조회/수정 규칙
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::restaurants::{MongoRestaurantStore, RestaurantRepository};
//!
//! let repository = RestaurantRepository::new(Arc::new(MongoRestaurantStore::new(&database)));
//! let restaurant = repository.get("user_2abc").await?;
//! ```

pub mod restaurant_store;
pub mod restaurant_repo;

pub use restaurant_store::*;
pub use restaurant_repo::*;
