//! # 레스토랑 문서 저장소
//!
//! 문서 저장소 경계를 정의하는 [`RestaurantStore`] trait과 MongoDB 구현체입니다.
//!
//! 저장소는 단일 문서 단위의 세 가지 연산만 제공합니다.
//!
//! | 연산 | MongoDB 구현 | 원자성 |
//! |------|-------------|--------|
//! | `find` | `find_one({_id})` | - |
//! | `insert_if_absent` | `insert_one` + duplicate key(11000) 판별 | `_id` 유니크 제약으로 보장 |
//! | `replace_existing` | `replace_one({_id})`, `matched_count` 확인 | 없는 문서는 생성하지 않음 |
//!
//! 쓰기와 재조회는 분리된 연산이며, 재조회 책임은 리포지토리에 있습니다.

use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
};
use crate::{
    db::Database,
    domain::entities::restaurants::Restaurant,
    errors::{AppError, AppResult},
};

/// 레스토랑 컬렉션 이름
pub const RESTAURANT_COLLECTION: &str = "restaurants";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 레스토랑 문서 저장소 경계
///
/// 운영에서는 [`MongoRestaurantStore`]를, 테스트에서는 인메모리 구현을 주입합니다.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// ID로 문서를 조회합니다. 없으면 `Ok(None)`.
    async fn find(&self, id: &str) -> AppResult<Option<Restaurant>>;

    /// 같은 ID의 문서가 없을 때만 저장합니다.
    ///
    /// * `Ok(true)` - 새 문서가 저장됨
    /// * `Ok(false)` - 이미 존재하여 아무것도 쓰지 않음
    async fn insert_if_absent(&self, restaurant: &Restaurant) -> AppResult<bool>;

    /// 이미 존재하는 문서를 통째로 교체합니다.
    ///
    /// * `Ok(true)` - 교체됨
    /// * `Ok(false)` - 문서가 없어 아무것도 쓰지 않음
    async fn replace_existing(&self, restaurant: &Restaurant) -> AppResult<bool>;
}

/// MongoDB 기반 레스토랑 저장소
#[derive(Clone)]
pub struct MongoRestaurantStore {
    collection: Collection<Document>,
}

impl MongoRestaurantStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database
                .get_database()
                .collection::<Document>(RESTAURANT_COLLECTION),
        }
    }
}

#[async_trait]
impl RestaurantStore for MongoRestaurantStore {
    async fn find(&self, id: &str) -> AppResult<Option<Restaurant>> {
        let document = self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        document.map(from_document).transpose()
    }

    async fn insert_if_absent(&self, restaurant: &Restaurant) -> AppResult<bool> {
        let document = to_document(restaurant)?;

        match self.collection.insert_one(document).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn replace_existing(&self, restaurant: &Restaurant) -> AppResult<bool> {
        let document = to_document(restaurant)?;

        let result = self.collection
            .replace_one(doc! { "_id": restaurant.id.as_str() }, document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}

/// 엔티티를 저장 문서로 변환합니다. `id`는 `_id`로 옮겨집니다.
pub fn to_document(restaurant: &Restaurant) -> AppResult<Document> {
    let mut document = mongodb::bson::to_document(restaurant)
        .map_err(|e| AppError::DatabaseError(format!("레스토랑 문서 직렬화 실패: {}", e)))?;

    document.remove("id");
    document.insert("_id", restaurant.id.as_str());

    Ok(document)
}

/// 저장 문서를 엔티티로 변환합니다. `_id`는 `id`로 옮겨집니다.
pub fn from_document(mut document: Document) -> AppResult<Restaurant> {
    if let Some(id) = document.remove("_id") {
        document.insert("id", id);
    }

    mongodb::bson::from_document(document)
        .map_err(|e| AppError::DatabaseError(format!("레스토랑 문서 역직렬화 실패: {}", e)))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
