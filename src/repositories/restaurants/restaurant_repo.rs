//! # 레스토랑 리포지토리
//!
//! 레스토랑 문서의 생성, 조회, 수정 규칙을 담당합니다.
//! 실제 저장은 주입된 [`RestaurantStore`]에 위임합니다.
//!
//! ## 규칙
//!
//! - **생성**: 같은 ID가 이미 있으면 아무것도 쓰지 않고 저장된 문서를 그대로 돌려줍니다.
//!   존재 확인과 저장은 `insert_if_absent` 한 번으로 처리되므로 동시 생성 요청 중 하나만 저장됩니다.
//! - **수정**: 존재하는 문서만 교체합니다. 없는 ID로 수정하면 아무것도 생성되지 않습니다.
//! - **타임스탬프**: `createdAt`은 최초 저장 값이 유지되고, `updatedAt`은 쓰기마다 갱신됩니다.
//! - 모든 쓰기 결과는 저장소에서 다시 읽은 값으로 반환합니다.

use std::sync::Arc;
use chrono::Utc;
use log::{error, info, warn};
use validator::Validate;
use crate::{
    domain::entities::restaurants::Restaurant,
    errors::{AppError, AppResult},
    repositories::restaurants::RestaurantStore,
    utils::string_utils::validate_required_string,
};

/// 생성 요청의 결과
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// 새 문서가 저장됨
    Created(Restaurant),
    /// 같은 ID의 문서가 이미 있어 저장된 문서를 그대로 반환함
    Existing(Restaurant),
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }

    pub fn into_restaurant(self) -> Restaurant {
        match self {
            CreateOutcome::Created(restaurant) | CreateOutcome::Existing(restaurant) => restaurant,
        }
    }
}

/// 레스토랑 리포지토리
pub struct RestaurantRepository {
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantRepository {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// 레스토랑 문서를 생성합니다.
    ///
    /// 요청 본문의 `isVerified`/`isProfileComplete`는 무시되고 false로 저장됩니다.
    /// 비어 있는 `createdAt`/`updatedAt`은 현재 시각으로 채워집니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID가 비어 있음
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn create(&self, mut restaurant: Restaurant) -> AppResult<CreateOutcome> {
        Self::validate(&restaurant)?;

        info!("Creating restaurant with ID: {}", restaurant.id);

        restaurant.prepare_for_create(Utc::now());

        let inserted = self.store
            .insert_if_absent(&restaurant)
            .await
            .inspect_err(|e| error!("Error creating restaurant {}: {}", restaurant.id, e))?;

        if !inserted {
            warn!("Restaurant already exists with ID: {}", restaurant.id);
            let existing = self.reload(&restaurant.id).await?;
            return Ok(CreateOutcome::Existing(existing));
        }

        let created = self.reload(&restaurant.id).await?;
        info!("Restaurant created successfully: {}", created.id);

        Ok(CreateOutcome::Created(created))
    }

    /// ID로 레스토랑을 조회합니다. 없으면 `Ok(None)`.
    pub async fn get(&self, id: &str) -> AppResult<Option<Restaurant>> {
        validate_required_string(id, "Restaurant ID")?;

        let restaurant = self.store
            .find(id)
            .await
            .inspect_err(|e| error!("Error fetching restaurant {}: {}", id, e))?;

        if restaurant.is_none() {
            warn!("Restaurant not found with ID: {}", id);
        }

        Ok(restaurant)
    }

    /// 존재하는 레스토랑 문서를 교체합니다.
    ///
    /// 문서가 없으면 아무것도 쓰지 않고 `Ok(None)`을 반환합니다.
    /// `createdAt`은 요청 본문과 무관하게 저장된 값이 유지됩니다.
    pub async fn update(&self, mut restaurant: Restaurant) -> AppResult<Option<Restaurant>> {
        Self::validate(&restaurant)?;

        info!("Updating restaurant with ID: {}", restaurant.id);

        let Some(stored) = self.get(&restaurant.id).await? else {
            return Ok(None);
        };

        restaurant.prepare_for_update(stored.created_at, Utc::now());

        let replaced = self.store
            .replace_existing(&restaurant)
            .await
            .inspect_err(|e| error!("Error updating restaurant {}: {}", restaurant.id, e))?;

        if !replaced {
            warn!("Restaurant disappeared before update: {}", restaurant.id);
            return Ok(None);
        }

        let updated = self.reload(&restaurant.id).await?;
        info!("Restaurant updated successfully: {}", updated.id);

        Ok(Some(updated))
    }

    fn validate(restaurant: &Restaurant) -> AppResult<()> {
        restaurant
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))
    }

    /// 쓰기 직후 저장된 문서를 다시 읽습니다.
    async fn reload(&self, id: &str) -> AppResult<Restaurant> {
        self.store
            .find(id)
            .await
            .inspect_err(|e| error!("Error reloading restaurant {}: {}", id, e))?
            .ok_or_else(|| {
                error!("Restaurant {} missing right after write", id);
                AppError::InternalError(format!("Restaurant {} missing right after write", id))
            })
    }
}
