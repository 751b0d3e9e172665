//! 레스토랑 프로필 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 협력 객체를 초기화합니다.
//! MongoDB 연결, Clerk 토큰 검증기, GCS 서명기를 구성한 뒤 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use restaurant_service_backend::config::{CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig};
use restaurant_service_backend::core::AppState;
use restaurant_service_backend::db::Database;
use restaurant_service_backend::errors::AppResult;
use restaurant_service_backend::repositories::restaurants::{MongoRestaurantStore, RestaurantRepository};
use restaurant_service_backend::routes::configure_all_routes;
use restaurant_service_backend::services::auth::ClerkVerifier;
use restaurant_service_backend::services::storage::{GcsV4Signer, UploadAuthorizer};

/// 로컬 환경에서 항상 허용하는 프론트엔드 개발 서버 주소
const LOCAL_DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 레스토랑 프로필 서비스 시작중...");

    let state = match build_app_state().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 협력 서비스가 초기화되었습니다!");

    start_http_server(state).await
}

/// 협력 객체를 생성하고 애플리케이션 상태로 묶습니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - MongoDB 연결 실패
/// * `AppError::ConfigError` - Clerk 시크릿 키, 버킷, 서비스 계정 키 누락 또는 오류
async fn build_app_state() -> AppResult<AppState> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
    let store = Arc::new(MongoRestaurantStore::new(&database));

    info!("🍽️ 레스토랑 저장소 준비 완료: {}.restaurants", database.database_name());

    let verifier = Arc::new(ClerkVerifier::from_env()?);
    let signer = Arc::new(GcsV4Signer::from_env()?);

    Ok(AppState::new(
        RestaurantRepository::new(store),
        UploadAuthorizer::new(verifier, signer),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let base_path = ServerConfig::base_path();
    let environment = Environment::current();

    info!("🌐 서버가 http://{} 에서 실행중입니다 ({:?})", bind_address, environment);
    info!("📍 Health check: http://{}{}/health", bind_address, base_path);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors(&environment);

        App::new()
            .app_data(state.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, &base_path))
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=restaurant_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`의 origin을 허용하며, 개발/테스트 환경에서는
/// 로컬 프론트엔드 개발 서버 주소를 항상 추가합니다.
fn configure_cors(environment: &Environment) -> Cors {
    let mut origins = CorsConfig::allowed_origins();

    if environment.is_local() {
        for origin in LOCAL_DEV_ORIGINS {
            if !origins.iter().any(|allowed| allowed == origin) {
                origins.push(origin.to_string());
            }
        }
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
