//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 저장소 구현은 trait 객체로 주입되어
//! 테스트에서는 인메모리 구현으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::restaurants::RestaurantRepository;
//!
//! let outcome = repository.create(restaurant).await?;
//! ```

pub mod restaurants;
