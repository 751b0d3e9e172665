//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, CORS, Rate Limiting 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 로컬 설정(예: localhost CORS origin)을 허용하는 환경인지 확인합니다.
    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8081, 프론트엔드 프록시 기본 대상)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8081)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 모든 라우트 앞에 붙는 경로 접두사를 반환합니다.
    ///
    /// 기존 프론트엔드는 `/api` 접두사로 요청하므로 `API_BASE_PATH=/api`로 맞출 수 있습니다.
    /// 기본값은 빈 문자열(루트 마운트)입니다.
    pub fn base_path() -> String {
        normalize_base_path(&env::var("API_BASE_PATH").unwrap_or_default())
    }

    /// HTTP 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 경로 접두사를 `/segment` 형태로 정규화합니다. 빈 값과 `/`는 빈 문자열이 됩니다.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (기본값: "foodexpress_dev")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "foodexpress_dev".to_string())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS`에 콤마로 구분된 목록을 지정합니다.
    /// 설정되지 않은 경우 React 개발 서버 주소를 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// 콤마로 구분된 origin 목록을 파싱합니다. 빈 항목은 무시합니다.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_PER_SECOND 미설정 또는 파싱 실패. 기본값 100 사용");
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_BURST_SIZE 미설정 또는 파싱 실패. 기본값 200 사용");
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_is_local() {
        assert!(Environment::Development.is_local());
        assert!(Environment::Test.is_local());
        assert!(!Environment::Staging.is_local());
        assert!(!Environment::Production.is_local());
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("api"), "/api");
        assert_eq!(normalize_base_path("/api/"), "/api");
        assert_eq!(normalize_base_path(" /api/v1 "), "/api/v1");
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, https://foodexpress.app/ ,,");

        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://foodexpress.app".to_string(),
            ]
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8081);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("API_BASE_PATH").is_err() {
            assert_eq!(ServerConfig::base_path(), "");
        }
    }
}
