//! 스토리지 업로드 DTO

pub mod upload_response;

pub use upload_response::*;
