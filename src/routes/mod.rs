//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 선택적 경로 접두사(`API_BASE_PATH`) 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/restaurants` | [`handlers::restaurants::create_restaurant`] |
//! | `GET` | `/restaurants/{id}` | [`handlers::restaurants::get_restaurant`] |
//! | `PUT` | `/restaurants/{id}` | [`handlers::restaurants::update_restaurant`] |
//! | `POST` | `/storage/upload` | [`handlers::storage::upload_file`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! // 기존 프론트엔드 프록시와 맞추려면 "/api"
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, "/api"));
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `base_path` - 정규화된 경로 접두사 (`""` 또는 `"/api"` 형태)
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, base_path: &str) {
    cfg.app_data(json_config());

    cfg.service(
        web::scope(base_path)
            .service(health_check)
            .configure(configure_restaurant_routes)
            .configure(configure_storage_routes),
    );
}

/// 레스토랑 프로필 라우트
fn configure_restaurant_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/restaurants")
            .service(handlers::restaurants::create_restaurant)
            .service(handlers::restaurants::get_restaurant)
            .service(handlers::restaurants::update_restaurant),
    );
}

/// 스토리지 업로드 라우트
fn configure_storage_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/storage")
            .service(handlers::storage::upload_file),
    );
}

/// JSON 본문 파싱 실패도 `{ "error": ... }` 형태의 400으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 헬스체크 엔드포인트
///
/// 프로세스가 요청을 받을 수 있는지만 확인하며, 협력 서비스 상태는 확인하지 않습니다.
///
/// ```text
/// HTTP/1.1 200 OK
/// content-type: text/plain; charset=utf-8
///
/// Backend is running!
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend is running!")
}
