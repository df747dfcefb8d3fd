//! # Domain Models Module
//!
//! 화면 표시용 날짜·시간 값 객체를 정의합니다.
//!
//! | 모델 | 표시 형식 | 해석 형식 |
//! |------|-----------|-----------|
//! | [`CalendarDate`] | `MM/DD/YYYY` | `[M]M/[D]D/YYYY` |
//! | [`ClockTime`] | `H:MM AM` | `[H]H:MM AM/PM` |
//!
//! 두 모델 모두 형식 검증만 수행하며, 실제 달력상 유효성은 `to_naive`에서 확인합니다.

pub mod calendar_date;
pub mod clock_time;

pub use calendar_date::CalendarDate;
pub use clock_time::{ClockTime, Meridiem};
