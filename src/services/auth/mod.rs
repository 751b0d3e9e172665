//! 인증 서비스 모듈
//!
//! 외부 인증 제공자(Clerk)가 발급한 세션 토큰을 검증합니다.
//! 이 서비스는 토큰을 발급하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{ClerkVerifier, IdentityVerifier};
//!
//! let verifier = ClerkVerifier::from_env()?;
//! let caller_id = verifier.verify(token).await?;
//! ```

pub mod clerk_verifier;

pub use clerk_verifier::*;
