//! 인증 세션 모델

pub mod session_claims;

pub use session_claims::*;
