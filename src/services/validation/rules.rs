//! # 순수 검증 규칙
//!
//! 부수 효과 없이 값만 검사하는 술어 함수들입니다.
//! [`FieldValidator`](super::FieldValidator)와 날짜/시간 모델의 파서가 이 규칙을 공유합니다.
//!
//! 숫자 계열 규칙(`is_numeric`, `is_integral`, `is_positive`)은 실제 숫자 파싱이 아닌
//! 문자 단위 검사입니다. 소수점이나 부호의 개수·위치를 검사하지 않으며 빈 문자열도 통과합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

/// `[M]M/[D]D/YYYY` 형식 (형식만 검사하며 2월 30일 같은 날짜도 통과)
pub static DATE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0?[1-9]|1[012])/(0?[1-9]|1[0-9]|2[0-9]|3[01])/([0-9]{4})$")
        .expect("date pattern is valid")
});

/// `[H]H:MM AM/PM` 형식 (오전/오후 표기는 대소문자 무관)
pub static TIME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(0?[1-9]|1[012]):([0-5][0-9]) ([AP]M)$").expect("time pattern is valid")
});

/// 값이 존재하고 앞뒤 공백 제거 후 비어 있지 않은지 확인합니다.
pub fn is_not_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// 모든 문자가 숫자, `.`, `-` 중 하나인지 확인합니다.
pub fn is_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

/// 모든 문자가 숫자 또는 `-`인지 확인합니다. `"-"` 단독도 통과합니다.
pub fn is_integral(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '-')
}

/// 모든 문자가 숫자 또는 `.`인지 확인합니다.
pub fn is_positive(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// 문자 수가 `max` 이하인지 확인합니다.
pub fn is_within_length(value: &str, max: usize) -> bool {
    value.validate_length(None, Some(max as u64), None)
}

/// 날짜 형식을 확인합니다. 값이 없거나 공백뿐이면 통과합니다.
pub fn is_date_format(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.trim().is_empty() => DATE_FORMAT.is_match(v),
        _ => true,
    }
}

/// 시간 형식을 확인합니다. 값이 없거나 공백뿐이면 통과합니다.
pub fn is_time_format(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.trim().is_empty() => TIME_FORMAT.is_match(v),
        _ => true,
    }
}
