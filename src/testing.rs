//! 테스트용 인메모리 구현체
//!
//! 저장소, 신원 검증기, URL 서명기의 가짜 구현을 제공합니다.
//! 각 구현은 호출 기록을 남겨 "쓰기가 일어나지 않았음" 같은 조건을 검증할 수 있습니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use crate::{
    domain::{entities::restaurants::Restaurant, models::storage::SignedUploadUrl},
    errors::{AppError, AppResult},
    repositories::restaurants::RestaurantStore,
    services::{auth::IdentityVerifier, storage::UploadUrlSigner},
};

/// 인메모리 레스토랑 저장소
#[derive(Default)]
pub struct InMemoryRestaurantStore {
    documents: Mutex<HashMap<String, Restaurant>>,
    writes: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl InMemoryRestaurantStore {
    /// 쓰기 횟수에 포함되지 않는 초기 데이터
    pub fn seed(&self, restaurant: Restaurant) {
        self.documents.lock().unwrap().insert(restaurant.id.clone(), restaurant);
    }

    pub fn get(&self, id: &str) -> Option<Restaurant> {
        self.documents.lock().unwrap().get(id).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// 이후 모든 호출이 `DatabaseError`로 실패합니다.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> AppResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn find(&self, id: &str) -> AppResult<Option<Restaurant>> {
        self.check_failure()?;
        Ok(self.get(id))
    }

    async fn insert_if_absent(&self, restaurant: &Restaurant) -> AppResult<bool> {
        self.check_failure()?;
        let mut documents = self.documents.lock().unwrap();
        if documents.contains_key(&restaurant.id) {
            return Ok(false);
        }
        documents.insert(restaurant.id.clone(), restaurant.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn replace_existing(&self, restaurant: &Restaurant) -> AppResult<bool> {
        self.check_failure()?;
        let mut documents = self.documents.lock().unwrap();
        match documents.get_mut(&restaurant.id) {
            Some(stored) => {
                *stored = restaurant.clone();
                self.writes.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 고정된 토큰 → 호출자 ID 목록으로 동작하는 검증기
pub struct StaticVerifier {
    tokens: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StaticVerifier {
    pub fn new(tokens: &[(&str, &str)]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|(token, caller)| (token.to_string(), caller.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::AuthenticationError("Invalid session token".to_string()))
    }
}

/// 서명 요청 기록
#[derive(Debug, Clone, PartialEq)]
pub struct SignRequest {
    pub path: String,
    pub content_type: String,
    pub ttl: Duration,
}

/// 요청을 기록하고 예측 가능한 URL을 돌려주는 서명기
#[derive(Default)]
pub struct RecordingSigner {
    requests: Mutex<Vec<SignRequest>>,
    failure: Mutex<Option<String>>,
}

impl RecordingSigner {
    pub fn requests(&self) -> Vec<SignRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("https://signed.test/{}?sig=fake", path)
    }

    /// 이후 모든 서명이 `ExternalServiceError`로 실패합니다.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl UploadUrlSigner for RecordingSigner {
    async fn sign_upload_url(&self, path: &str, content_type: &str, ttl: Duration) -> AppResult<SignedUploadUrl> {
        self.requests.lock().unwrap().push(SignRequest {
            path: path.to_string(),
            content_type: content_type.to_string(),
            ttl,
        });

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(AppError::ExternalServiceError(message.clone()));
        }

        Ok(SignedUploadUrl {
            url: self.url_for(path),
            expires_at: Utc::now() + ttl,
        })
    }
}
