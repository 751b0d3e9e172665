//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, CORS, Rate Limiting 설정
//! - [`provider_config`] - Clerk 인증, 오브젝트 스토리지 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, StorageConfig};
//!
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! let bucket = StorageConfig::bucket()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8081"
//! export API_BASE_PATH="/api"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="foodexpress"
//!
//! # 외부 서비스
//! export CLERK_SECRET_KEY="sk_live_..."
//! export FIREBASE_STORAGE_BUCKET="foodexpress.appspot.com"
//! export GOOGLE_APPLICATION_CREDENTIALS="/etc/foodexpress/servicekey.json"
//! ```

pub mod data_config;
pub mod provider_config;

pub use data_config::*;
pub use provider_config::*;
