//! # 날짜·시간 표시 포맷터
//!
//! 텍스트 입력을 미리 채울 때 사용하는 표시 문자열을 생성합니다.
//!
//! | 함수 | 결과 예 |
//! |------|---------|
//! | [`current_date_display`] | `03/01/2024` |
//! | [`current_time_display`] | `9:05 PM` |
//! | [`format_date`] | `03/01/2024` |
//! | [`format_time`] | `12:00 AM` |
//! | [`format_date_input`] | `"2024-03-01"` → `03/01/2024` |

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime};

use crate::domain::models::{CalendarDate, ClockTime};
use crate::errors::{FormError, FormResult};

/// `format_date_input`이 추가로 받아들이는 날짜 형식
pub mod input_formats {
    /// ISO 8601 날짜: "2024-03-01"
    pub const ISO_DATE: &str = "%Y-%m-%d";
}

/// 오늘 날짜(로컬 시간대)를 `MM/DD/YYYY`로 반환합니다.
pub fn current_date_display() -> String {
    format_date(&Local::now().date_naive())
}

/// 현재 시각(로컬 시간대)을 `H:MM AM/PM`으로 반환합니다.
pub fn current_time_display() -> String {
    format_time(&Local::now().time())
}

/// 날짜를 `MM/DD/YYYY`로 변환합니다.
///
/// 연도가 0–9999를 벗어나면 연도를 그대로(`06/07/12345`, `06/07/-5`) 붙이며,
/// 이 결과는 날짜 검증을 통과하지 않습니다. 입력 문자열을 변환할 때는
/// 범위를 벗어난 연도를 에러로 돌려주는 [`format_date_input`]을 사용합니다.
pub fn format_date(date: &NaiveDate) -> String {
    match CalendarDate::from_naive(date) {
        Ok(display) => display.to_string(),
        Err(_) => format!("{:02}/{:02}/{}", date.month(), date.day(), date.year()),
    }
}

/// 시각을 `H:MM AM/PM`으로 변환합니다. 시는 0으로 채우지 않습니다.
pub fn format_time(time: &NaiveTime) -> String {
    ClockTime::from_naive(time).to_string()
}

/// 문자열로 받은 날짜를 `MM/DD/YYYY`로 변환합니다.
///
/// `YYYY-MM-DD`, RFC 3339 타임스탬프, `[M]M/[D]D/YYYY`를 받아들입니다.
///
/// # Errors
///
/// * `FormError::InvalidDate` - 어떤 형식으로도 해석할 수 없거나 존재하지 않는 날짜, 또는 네 자리를 벗어난 연도
pub fn format_date_input(input: &str) -> FormResult<String> {
    let invalid = || FormError::InvalidDate(input.to_string());
    let trimmed = input.trim();

    let date = if let Ok(date) = NaiveDate::parse_from_str(trimmed, input_formats::ISO_DATE) {
        date
    } else if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        timestamp.date_naive()
    } else {
        trimmed
            .parse::<CalendarDate>()
            .and_then(|d| d.to_naive())
            .map_err(|_| invalid())?
    };

    CalendarDate::from_naive(&date)
        .map(|display| display.to_string())
        .map_err(|_| invalid())
}
