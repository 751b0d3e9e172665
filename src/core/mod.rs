//! # Core Module
//!
//! 요청 처리 전반에서 공유되는 애플리케이션 상태를 정의합니다.
//!
//! 협력 객체(저장소, 토큰 검증기, URL 서명기)는 `main`에서 명시적으로 생성되어
//! 생성자 인자로 주입됩니다. 테스트는 같은 생성자에 인메모리 구현을 넘깁니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::new(
//!     RestaurantRepository::new(Arc::new(MongoRestaurantStore::new(&database))),
//!     UploadAuthorizer::new(Arc::new(ClerkVerifier::from_env()?), Arc::new(GcsV4Signer::from_env()?)),
//! ));
//!
//! App::new().app_data(state.clone())
//! ```

pub mod app_state;

pub use app_state::*;
