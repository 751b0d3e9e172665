//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 협력 서비스와의 연동을 trait 경계 뒤에 두어, 핸들러와 테스트가 구현체에 의존하지 않도록 합니다.
//!
//! - [`auth`] - Clerk 세션 토큰 검증
//! - [`storage`] - 서명 업로드 URL 발급

pub mod auth;
pub mod storage;
