//! # Clerk 세션 토큰 검증
//!
//! 프론트엔드가 Clerk에서 받은 세션 토큰(RS256 JWT)을 검증하고 호출자의 Clerk 사용자 ID를 반환합니다.
//!
//! ## 검증 흐름
//!
//! ```text
//! Bearer 토큰
//!     │
//!     ├─ 1. 헤더의 kid 추출
//!     ├─ 2. JWKS 캐시에서 kid 검색 (없으면 Clerk Backend API에서 다시 조회, 최소 간격 적용)
//!     ├─ 3. RS256 서명, exp, nbf 검증
//!     ├─ 4. azp 검증 (허용 목록이 설정된 경우)
//!     └─ 5. sub 반환
//! ```
//!
//! JWKS 조회는 `Authorization: Bearer {CLERK_SECRET_KEY}`로 인증합니다.

use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use log::{debug, info, warn};
use crate::{
    config::ClerkConfig,
    domain::models::session::SessionClaims,
    errors::{AppError, AppResult, ErrorContext},
};

/// 호출자 신원 검증 경계
///
/// 토큰이 유효하면 호출자 ID를 반환하고, 그렇지 않으면 `AuthenticationError`를 반환합니다.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AppResult<String>;
}

/// 모르는 kid로 JWKS를 다시 조회하기 전 최소 대기 시간
pub const DEFAULT_JWKS_REFETCH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Default)]
struct JwksCache {
    keys: Option<JwkSet>,
    fetched_at: Option<Instant>,
}

impl JwksCache {
    fn fetched_within(&self, interval: Duration) -> bool {
        self.keys.is_some()
            && self.fetched_at.is_some_and(|at| at.elapsed() < interval)
    }
}

/// Clerk JWKS 기반 세션 토큰 검증기
pub struct ClerkVerifier {
    http: reqwest::Client,
    jwks_url: String,
    secret_key: String,
    authorized_parties: Vec<String>,
    /// 마지막으로 조회한 JWKS. 모르는 kid가 오면 갱신됩니다.
    jwks: RwLock<JwksCache>,
    refetch_interval: Duration,
}

impl ClerkVerifier {
    pub fn new(jwks_url: impl Into<String>, secret_key: impl Into<String>, authorized_parties: Vec<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            jwks_url: jwks_url.into(),
            secret_key: secret_key.into(),
            authorized_parties,
            jwks: RwLock::new(JwksCache::default()),
            refetch_interval: DEFAULT_JWKS_REFETCH_INTERVAL,
        }
    }

    pub fn with_refetch_interval(mut self, interval: Duration) -> Self {
        self.refetch_interval = interval;
        self
    }

    /// 환경 변수 설정으로 검증기를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `CLERK_SECRET_KEY` 미설정
    pub fn from_env() -> AppResult<Self> {
        let verifier = Self::new(
            ClerkConfig::jwks_url(),
            ClerkConfig::secret_key()?,
            ClerkConfig::authorized_parties(),
        );

        info!(
            "🔐 Clerk 토큰 검증기 초기화: {} (azp 허용 {}개)",
            verifier.jwks_url,
            verifier.authorized_parties.len()
        );

        Ok(verifier)
    }

    async fn decoding_key(&self, kid: &str) -> AppResult<DecodingKey> {
        let unknown_key = || AppError::AuthenticationError(format!("Unknown signing key: {}", kid));

        {
            let cache = self.jwks.read().context("JWKS cache lock poisoned")?;

            if let Some(jwk) = cache.keys.as_ref().and_then(|jwks| jwks.find(kid)) {
                return Self::key_from_jwk(jwk);
            }

            if cache.fetched_within(self.refetch_interval) {
                warn!("JWKS 재조회 간격 이내의 알 수 없는 kid: {}", kid);
                return Err(unknown_key());
            }
        }

        debug!("JWKS 캐시에 kid {} 없음. JWKS 재조회", kid);

        let jwks = self.fetch_jwks().await?;
        let key = jwks.find(kid).map(Self::key_from_jwk).transpose()?;

        *self.jwks.write().context("JWKS cache lock poisoned")? = JwksCache {
            keys: Some(jwks),
            fetched_at: Some(Instant::now()),
        };

        key.ok_or_else(unknown_key)
    }

    fn key_from_jwk(jwk: &jsonwebtoken::jwk::Jwk) -> AppResult<DecodingKey> {
        DecodingKey::from_jwk(jwk)
            .map_err(|e| AppError::AuthenticationError(format!("Invalid signing key: {}", e)))
    }

    async fn fetch_jwks(&self) -> AppResult<JwkSet> {
        let response = self.http
            .get(&self.jwks_url)
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Clerk JWKS 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Clerk JWKS 조회 실패: HTTP {}",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Clerk JWKS 응답 파싱 실패: {}", e)))
    }

    fn check_authorized_party(&self, claims: &SessionClaims) -> AppResult<()> {
        if self.authorized_parties.is_empty() {
            return Ok(());
        }

        match claims.azp.as_deref() {
            Some(azp) if self.authorized_parties.iter().any(|party| party == azp) => Ok(()),
            other => Err(AppError::AuthenticationError(format!(
                "Unauthorized party: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

#[async_trait]
impl IdentityVerifier for ClerkVerifier {
    async fn verify(&self, token: &str) -> AppResult<String> {
        let header = decode_header(token)
            .map_err(|e| AppError::AuthenticationError(format!("Malformed session token: {}", e)))?;

        let kid = header
            .kid
            .ok_or_else(|| AppError::AuthenticationError("Session token has no kid".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<SessionClaims>(token, &key, &validation)
            .map_err(|e| {
                warn!("세션 토큰 검증 실패: {}", e);
                AppError::AuthenticationError(format!("Invalid session token: {}", e))
            })?
            .claims;

        self.check_authorized_party(&claims)?;

        debug!("세션 토큰 검증 성공: user={}, session={:?}", claims.sub, claims.sid);

        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use rsa::{pkcs1::EncodeRsaPrivateKey, pkcs8::DecodePrivateKey, traits::PublicKeyParts, RsaPrivateKey};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KID: &str = "ins_test_key";
    const SECRET: &str = "sk_test_secret";

    fn private_key() -> RsaPrivateKey {
        RsaPrivateKey::from_pkcs8_pem(include_str!("../../../testdata/test_rsa_key.pem")).unwrap()
    }

    fn jwks_body() -> serde_json::Value {
        let public_key = private_key().to_public_key();
        json!({
            "keys": [{
                "use": "sig",
                "kty": "RSA",
                "kid": KID,
                "alg": "RS256",
                "n": URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be()),
                "e": URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be()),
            }]
        })
    }

    fn claims(exp_offset: i64, azp: Option<&str>) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: "user_2abc".to_string(),
            sid: Some("sess_123".to_string()),
            azp: azp.map(str::to_string),
            exp: now + exp_offset,
            nbf: Some(now - 10),
            iat: Some(now - 10),
        }
    }

    fn sign(claims: &SessionClaims, kid: &str) -> String {
        let der = private_key().to_pkcs1_der().unwrap();
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());
        encode(&header, claims, &EncodingKey::from_rsa_der(der.as_bytes())).unwrap()
    }

    async fn jwks_server(expected_calls: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/jwks"))
            .and(header("authorization", format!("Bearer {}", SECRET).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(jwks_body()))
            .expect(expected_calls)
            .mount(&server)
            .await;
        server
    }

    fn verifier(server: &MockServer, authorized_parties: Vec<String>) -> ClerkVerifier {
        ClerkVerifier::new(format!("{}/v1/jwks", server.uri()), SECRET, authorized_parties)
    }

    #[actix_web::test]
    async fn test_valid_token_returns_user_id_and_caches_jwks() {
        let server = jwks_server(1).await;
        let verifier = verifier(&server, vec![]);
        let token = sign(&claims(300, None), KID);

        assert_eq!(verifier.verify(&token).await.unwrap(), "user_2abc");
        assert_eq!(verifier.verify(&token).await.unwrap(), "user_2abc");
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let server = jwks_server(1).await;
        let verifier = verifier(&server, vec![]);
        let token = sign(&claims(-3600, None), KID);

        let result = verifier.verify(&token).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_unknown_kid_is_rejected() {
        let server = jwks_server(1).await;
        let verifier = verifier(&server, vec![]);
        let token = sign(&claims(300, None), "rotated_away");

        match verifier.verify(&token).await {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("rotated_away")),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_unknown_kids_within_refetch_interval_fetch_jwks_once() {
        let server = jwks_server(1).await;
        let verifier = verifier(&server, vec![]);

        for kid in ["rotated_away", "forged_kid", "rotated_away"] {
            let token = sign(&claims(300, None), kid);
            assert!(matches!(
                verifier.verify(&token).await,
                Err(AppError::AuthenticationError(_))
            ));
        }

        let token = sign(&claims(300, None), KID);
        assert_eq!(verifier.verify(&token).await.unwrap(), "user_2abc");
    }

    #[actix_web::test]
    async fn test_unknown_kid_refetches_after_interval_elapses() {
        let server = jwks_server(2).await;
        let verifier = verifier(&server, vec![]).with_refetch_interval(Duration::ZERO);

        for kid in ["rotated_away", "forged_kid"] {
            let token = sign(&claims(300, None), kid);
            assert!(verifier.verify(&token).await.is_err());
        }
    }

    #[actix_web::test]
    async fn test_authorized_party_is_enforced() {
        let server = jwks_server(1).await;
        let verifier = verifier(&server, vec!["https://foodexpress.app".to_string()]);

        let allowed = sign(&claims(300, Some("https://foodexpress.app")), KID);
        let foreign = sign(&claims(300, Some("https://evil.example")), KID);

        assert_eq!(verifier.verify(&allowed).await.unwrap(), "user_2abc");
        assert!(matches!(
            verifier.verify(&foreign).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_malformed_token_does_not_reach_jwks() {
        let server = jwks_server(0).await;
        let verifier = verifier(&server, vec![]);

        let result = verifier.verify("not-a-jwt").await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_jwks_outage_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let verifier = verifier(&server, vec![]);
        let token = sign(&claims(300, None), KID);

        let result = verifier.verify(&token).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
