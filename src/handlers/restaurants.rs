//! # Restaurant HTTP Handlers
//!
//! 레스토랑 프로필 생성, 조회, 수정 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/restaurants` | 생성 (이미 있으면 저장된 문서 반환) | 200 / 400 / 500 |
//! | `GET` | `/restaurants/{id}` | 조회 | 200 / 404 / 500 |
//! | `PUT` | `/restaurants/{id}` | 수정 | 200 / 400 / 404 / 500 |
//!
//! 응답 본문은 항상 저장소에서 다시 읽은 문서입니다.

use actix_web::{get, post, put, web, HttpResponse};
use log::warn;
use crate::{
    core::AppState,
    domain::entities::restaurants::Restaurant,
    errors::AppError,
};

/// 레스토랑 생성 핸들러
///
/// # 요청 예시
///
/// ```bash
/// curl -X POST http://localhost:8081/restaurants \
///   -H "Content-Type: application/json" \
///   -d '{"id":"user_2abc","name":"Cafe","email":"owner@cafe.in"}'
/// ```
///
/// 같은 ID로 다시 요청하면 새로 쓰지 않고 저장된 문서를 200으로 돌려줍니다.
#[post("")]
pub async fn create_restaurant(
    state: web::Data<AppState>,
    payload: web::Json<Restaurant>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.restaurants.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(outcome.into_restaurant()))
}

/// 레스토랑 조회 핸들러
#[get("/{id}")]
pub async fn get_restaurant(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let restaurant = state.restaurants
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant not found: {}", id)))?;

    Ok(HttpResponse::Ok().json(restaurant))
}

/// 레스토랑 수정 핸들러
///
/// 본문의 `id`가 경로의 `id`와 다르면 저장소에 접근하지 않고 400을 반환합니다.
#[put("/{id}")]
pub async fn update_restaurant(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<Restaurant>,
) -> Result<HttpResponse, AppError> {
    let restaurant = payload.into_inner();

    if restaurant.id != *id {
        warn!("ID mismatch on update: path={}, body={}", id, restaurant.id);
        return Err(AppError::ValidationError("ID mismatch".to_string()));
    }

    let updated = state.restaurants
        .update(restaurant)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant not found: {}", id)))?;

    Ok(HttpResponse::Ok().json(updated))
}
