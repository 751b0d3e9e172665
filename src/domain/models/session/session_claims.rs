//! Clerk 세션 토큰 클레임
//!
//! Clerk가 발급하는 세션 토큰(RS256 JWT)의 Payload 중 검증에 필요한 항목만 정의합니다.

use serde::{Deserialize, Serialize};

/// Clerk 세션 토큰 클레임
///
/// ## 클레임 구성
///
/// - `sub`: Clerk 사용자 ID (레스토랑 ID로 사용됨)
/// - `sid`: 세션 ID
/// - `azp`: 토큰을 요청한 origin (authorized party)
/// - `exp` / `nbf` / `iat`: Unix timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
