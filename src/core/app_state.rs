//! 애플리케이션 공유 상태
//!
//! 시작 시 한 번 구성되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.

use crate::{
    repositories::restaurants::RestaurantRepository,
    services::storage::UploadAuthorizer,
};

/// 핸들러가 사용하는 협력 객체 묶음
pub struct AppState {
    pub restaurants: RestaurantRepository,
    pub uploads: UploadAuthorizer,
}

impl AppState {
    pub fn new(restaurants: RestaurantRepository, uploads: UploadAuthorizer) -> Self {
        Self { restaurants, uploads }
    }
}
