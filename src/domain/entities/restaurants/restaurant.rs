//! Restaurant Entity Implementation
//!
//! 레스토랑 프로필 엔티티입니다. HTTP 요청/응답 본문과 저장 문서가 같은 필드 구성을 공유하며,
//! 필드 이름은 기존 프론트엔드와의 호환을 위해 camelCase로 직렬화됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 레스토랑 엔티티
///
/// `id`는 호출자의 Clerk 사용자 ID이며 생성 이후 변경되지 않습니다.
/// 저장소에서는 문서의 `_id`로 사용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default)]
    #[validate(custom(function = "validate_restaurant_id"))]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// 음식 카테고리 목록
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisine_types: Vec<String>,
    /// 관리자 검증 여부 (생성 시 항상 false)
    #[serde(default)]
    pub is_verified: bool,
    /// 프로필 설정 완료 여부 (생성 시 항상 false)
    #[serde(default)]
    pub is_profile_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    // 프로필 설정 필드
    /// FSSAI 식품 영업 허가 번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fssai_license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// 우편번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    /// 대표 이미지 참조 (스토리지 경로 또는 다운로드 URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_image: Option<String>,
}

impl Restaurant {
    /// ID만 채워진 레스토랑을 생성합니다.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// 최초 저장 직전의 상태로 만듭니다.
    ///
    /// 비어 있는 타임스탬프를 `now`로 채우고, 검증/프로필 완료 플래그는
    /// 요청 본문과 무관하게 false로 고정합니다.
    pub fn prepare_for_create(&mut self, now: DateTime<Utc>) {
        self.created_at.get_or_insert(now);
        self.updated_at.get_or_insert(now);
        self.is_verified = false;
        self.is_profile_complete = false;
    }

    /// 수정 저장 직전의 상태로 만듭니다.
    ///
    /// `createdAt`은 저장된 값을 그대로 유지하고 `updatedAt`만 갱신합니다.
    pub fn prepare_for_update(&mut self, stored_created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if stored_created_at.is_some() {
            self.created_at = stored_created_at;
        }
        self.updated_at = Some(now);
    }
}

/// 레스토랑 ID는 공백이 아닌 문자열이어야 합니다.
fn validate_restaurant_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message("Restaurant ID is required".into()));
    }
    Ok(())
}
