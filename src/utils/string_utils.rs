//! # 문자열 유틸리티
//!
//! 요청 값 검증, Authorization 헤더 파싱, 업로드 파일명 정리에 쓰이는 함수들입니다.

use crate::errors::{AppError, AppResult};

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  r1  ", "Restaurant ID").unwrap(), "r1");
/// assert!(validate_required_string("   ", "Restaurant ID").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// Authorization 헤더 값에서 토큰을 꺼냅니다.
///
/// `Bearer ` 접두사는 대소문자를 구분하지 않습니다. 접두사가 없으면 값 전체를 토큰으로 봅니다.
/// 토큰이 비어 있으면 `None`.
pub fn strip_bearer_prefix(header_value: &str) -> Option<&str> {
    let value = header_value.trim_start();

    let token = match value.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &value[7..],
        _ => value,
    };

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// 클라이언트가 보낸 파일명에서 디렉터리 부분을 제거합니다.
///
/// `/`와 `\` 모두 구분자로 취급하며, 마지막 구성 요소가 비어 있거나 `.`/`..`이면
/// ValidationError를 반환합니다.
pub fn sanitize_file_name(raw: &str) -> AppResult<String> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::ValidationError(format!("Invalid file name: {:?}", raw)));
    }

    Ok(name.to_string())
}
