//! 스토리지 업로드 관련 모델

pub mod upload_target;

pub use upload_target::*;
