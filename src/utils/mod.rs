//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, Bearer 토큰 추출, 파일명 정리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//!
//! let id = validate_required_string("  user_2abc  ", "Restaurant ID")?;
//! ```

pub mod string_utils;
