//! # Google Cloud Storage V4 서명 URL
//!
//! 서비스 계정 키로 GCS V4 서명(`GOOG4-RSA-SHA256`) 업로드 URL을 생성합니다.
//! 클라이언트는 발급된 URL로 파일을 직접 `PUT`하며, 이 서비스는 파일 바이트를 저장하지 않습니다.
//!
//! ## 서명 절차
//!
//! ```text
//! canonical request
//!   PUT
//!   /{bucket}/{object path}
//!   X-Goog-Algorithm=...&X-Goog-Credential=...&X-Goog-Date=...&X-Goog-Expires=...&X-Goog-SignedHeaders=content-type%3Bhost
//!   content-type:{content type}
//!   host:{host}
//!
//!   content-type;host
//!   UNSIGNED-PAYLOAD
//!
//! string to sign
//!   GOOG4-RSA-SHA256
//!   {YYYYMMDD'T'HHMMSS'Z'}
//!   {YYYYMMDD}/auto/storage/goog4_request
//!   hex(sha256(canonical request))
//!
//! signature = hex(RSASSA-PKCS1-v1_5-SHA256(string to sign))
//! ```
//!
//! 서명된 `content-type` 헤더와 다른 타입으로 업로드하면 스토리지가 요청을 거부합니다.

use std::fs;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use rsa::{
    pkcs1v15::SigningKey,
    pkcs8::DecodePrivateKey,
    signature::{SignatureEncoding, Signer},
    RsaPrivateKey,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use crate::{
    config::StorageConfig,
    domain::models::storage::SignedUploadUrl,
    errors::{AppError, AppResult},
};

const SIGNING_ALGORITHM: &str = "GOOG4-RSA-SHA256";
const SIGNED_HEADERS: &str = "content-type;host";
/// V4 서명 URL의 최대 유효 기간 (7일)
const MAX_EXPIRES_SECONDS: i64 = 7 * 24 * 60 * 60;

/// 시간 제한 업로드 URL 발급 경계
#[async_trait]
pub trait UploadUrlSigner: Send + Sync {
    /// `path`에 `content_type` 파일을 `ttl` 동안 업로드할 수 있는 URL을 발급합니다.
    async fn sign_upload_url(&self, path: &str, content_type: &str, ttl: Duration) -> AppResult<SignedUploadUrl>;
}

/// 서비스 계정 키 JSON 중 서명에 필요한 항목
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    /// PKCS#8 PEM 개인키
    pub private_key: String,
}

impl ServiceAccountKey {
    /// 서비스 계정 키 파일을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 파일이 없거나 JSON 형식이 잘못됨
    pub fn from_file(path: &str) -> AppResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("서비스 계정 키 파일 읽기 실패 ({}): {}", path, e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| AppError::ConfigError(format!("서비스 계정 키 파싱 실패 ({}): {}", path, e)))
    }
}

/// 서명 대상 요청의 정규화 결과
#[derive(Debug)]
struct CanonicalRequest {
    uri: String,
    query: String,
    request: String,
    string_to_sign: String,
}

/// GCS V4 서명기
pub struct GcsV4Signer {
    bucket: String,
    host: String,
    client_email: String,
    signing_key: SigningKey<Sha256>,
}

impl GcsV4Signer {
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 개인키가 PKCS#8 PEM 형식이 아님
    pub fn new(bucket: impl Into<String>, host: impl Into<String>, key: ServiceAccountKey) -> AppResult<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(&key.private_key)
            .map_err(|e| AppError::ConfigError(format!("서비스 계정 개인키 파싱 실패: {}", e)))?;

        Ok(Self {
            bucket: bucket.into(),
            host: host.into(),
            client_email: key.client_email,
            signing_key: SigningKey::<Sha256>::new(private_key),
        })
    }

    /// 환경 변수 설정으로 서명기를 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        let bucket = StorageConfig::bucket()?;
        let key = ServiceAccountKey::from_file(&StorageConfig::service_account_path())?;

        info!("🗂️ GCS 서명기 초기화: bucket={}, signer={}", bucket, key.client_email);

        Self::new(bucket, StorageConfig::host(), key)
    }

    /// 지정한 시각 기준으로 서명 URL을 생성합니다.
    pub fn sign_at(&self, path: &str, content_type: &str, ttl: Duration, now: DateTime<Utc>) -> AppResult<SignedUploadUrl> {
        let expires_seconds = ttl.num_seconds();
        if !(1..=MAX_EXPIRES_SECONDS).contains(&expires_seconds) {
            return Err(AppError::ValidationError(format!(
                "Upload URL lifetime must be between 1 and {} seconds",
                MAX_EXPIRES_SECONDS
            )));
        }

        let canonical = self.canonicalize(path, content_type, expires_seconds, now);
        let signature = self.signing_key.sign(canonical.string_to_sign.as_bytes());

        debug!("업로드 URL 서명 (만료 {}초)\n{}", expires_seconds, canonical.request);

        Ok(SignedUploadUrl {
            url: format!(
                "https://{}{}?{}&X-Goog-Signature={}",
                self.host,
                canonical.uri,
                canonical.query,
                hex::encode(signature.to_bytes())
            ),
            expires_at: now + ttl,
        })
    }

    fn canonicalize(&self, path: &str, content_type: &str, expires_seconds: i64, now: DateTime<Utc>) -> CanonicalRequest {
        let date = now.format("%Y%m%d").to_string();
        let timestamp = now.format("%Y%m%dT%H%M%SZ").to_string();
        let scope = format!("{}/auto/storage/goog4_request", date);

        let uri = format!("/{}/{}", self.bucket, encode_object_path(path));

        // 키 이름순으로 정렬되어 있어야 함
        let params = [
            ("X-Goog-Algorithm", SIGNING_ALGORITHM.to_string()),
            ("X-Goog-Credential", format!("{}/{}", self.client_email, scope)),
            ("X-Goog-Date", timestamp.clone()),
            ("X-Goog-Expires", expires_seconds.to_string()),
            ("X-Goog-SignedHeaders", SIGNED_HEADERS.to_string()),
        ];
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let headers = format!("content-type:{}\nhost:{}\n", content_type.trim(), self.host);

        let request = format!(
            "PUT\n{}\n{}\n{}\n{}\nUNSIGNED-PAYLOAD",
            uri, query, headers, SIGNED_HEADERS
        );

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            SIGNING_ALGORITHM,
            timestamp,
            scope,
            hex::encode(Sha256::digest(request.as_bytes()))
        );

        CanonicalRequest {
            uri,
            query,
            request,
            string_to_sign,
        }
    }
}

#[async_trait]
impl UploadUrlSigner for GcsV4Signer {
    async fn sign_upload_url(&self, path: &str, content_type: &str, ttl: Duration) -> AppResult<SignedUploadUrl> {
        self.sign_at(path, content_type, ttl, Utc::now())
    }
}

/// 오브젝트 경로의 각 구성 요소를 퍼센트 인코딩합니다. `/`는 유지됩니다.
fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;

    const PEM: &str = include_str!("../../../testdata/test_rsa_key.pem");
    const EMAIL: &str = "uploader@foodexpress.iam.gserviceaccount.com";

    fn signer() -> GcsV4Signer {
        let key = ServiceAccountKey {
            client_email: EMAIL.to_string(),
            private_key: PEM.to_string(),
        };
        GcsV4Signer::new("foodexpress.appspot.com", "storage.googleapis.com", key).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_canonical_request_layout() {
        let canonical = signer().canonicalize(
            "restaurants/user_2abc/images/menu photo.png",
            "image/png",
            900,
            fixed_now(),
        );

        let expected_query = "X-Goog-Algorithm=GOOG4-RSA-SHA256\
            &X-Goog-Credential=uploader%40foodexpress.iam.gserviceaccount.com%2F20240501%2Fauto%2Fstorage%2Fgoog4_request\
            &X-Goog-Date=20240501T120000Z\
            &X-Goog-Expires=900\
            &X-Goog-SignedHeaders=content-type%3Bhost";

        assert_eq!(canonical.uri, "/foodexpress.appspot.com/restaurants/user_2abc/images/menu%20photo.png");
        assert_eq!(canonical.query, expected_query);
        assert_eq!(
            canonical.request,
            format!(
                "PUT\n{}\n{}\ncontent-type:image/png\nhost:storage.googleapis.com\n\ncontent-type;host\nUNSIGNED-PAYLOAD",
                canonical.uri, expected_query
            )
        );
        assert!(canonical.string_to_sign.starts_with(
            "GOOG4-RSA-SHA256\n20240501T120000Z\n20240501/auto/storage/goog4_request\n"
        ));
    }

    #[test]
    fn test_signature_verifies_with_public_key() {
        let signer = signer();
        let signed = signer
            .sign_at("restaurants/r1/images/logo.png", "image/png", Duration::minutes(15), fixed_now())
            .unwrap();

        let (_, signature_hex) = signed.url.split_once("&X-Goog-Signature=").unwrap();
        let signature = Signature::try_from(hex::decode(signature_hex).unwrap().as_slice()).unwrap();

        let private_key = RsaPrivateKey::from_pkcs8_pem(PEM).unwrap();
        let verifying_key = VerifyingKey::<Sha256>::new(private_key.to_public_key());
        let canonical = signer.canonicalize("restaurants/r1/images/logo.png", "image/png", 900, fixed_now());

        assert!(verifying_key.verify(canonical.string_to_sign.as_bytes(), &signature).is_ok());
        assert!(signed.url.starts_with(
            "https://storage.googleapis.com/foodexpress.appspot.com/restaurants/r1/images/logo.png?X-Goog-Algorithm="
        ));
        assert_eq!(signed.expires_at, fixed_now() + Duration::minutes(15));
    }

    #[test]
    fn test_content_type_is_part_of_signature() {
        let signer = signer();
        let png = signer.sign_at("a/b.png", "image/png", Duration::minutes(15), fixed_now()).unwrap();
        let jpeg = signer.sign_at("a/b.png", "image/jpeg", Duration::minutes(15), fixed_now()).unwrap();

        assert_ne!(png.url, jpeg.url);
    }

    #[test]
    fn test_lifetime_bounds() {
        let signer = signer();

        assert!(signer.sign_at("a/b.png", "image/png", Duration::zero(), fixed_now()).is_err());
        assert!(signer.sign_at("a/b.png", "image/png", Duration::days(8), fixed_now()).is_err());
        assert!(signer.sign_at("a/b.png", "image/png", Duration::days(7), fixed_now()).is_ok());
    }

    #[test]
    fn test_invalid_private_key_is_config_error() {
        let key = ServiceAccountKey {
            client_email: EMAIL.to_string(),
            private_key: "not a pem".to_string(),
        };

        let result = GcsV4Signer::new("bucket", "storage.googleapis.com", key);

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_service_account_file_missing() {
        let result = ServiceAccountKey::from_file("/nonexistent/servicekey.json");

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
