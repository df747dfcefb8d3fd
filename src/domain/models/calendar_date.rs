//! 날짜 표시 값 객체

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::errors::{FormError, FormResult};
use crate::services::validation::rules::DATE_FORMAT;

/// `MM/DD/YYYY`로 표시되는 달력 날짜
///
/// 월(1–12)과 일(1–31)의 범위만 보장하며 월별 일수나 윤년은 검사하지 않습니다.
/// 따라서 `2/30/2021`도 표현할 수 있고, 실제 달력 날짜가 필요하면 [`CalendarDate::to_naive`]를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    month: u32,
    day: u32,
    year: i32,
}

impl CalendarDate {
    /// # Errors
    ///
    /// * `FormError::InvalidDate` - 월, 일, 연도가 표시 범위를 벗어난 경우
    pub fn new(month: u32, day: u32, year: i32) -> FormResult<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || !(0..=9999).contains(&year) {
            return Err(FormError::InvalidDate(format!("{}/{}/{}", month, day, year)));
        }
        Ok(Self { month, day, year })
    }

    /// 달력 날짜를 표시 값으로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::InvalidDate` - 연도가 네 자리(0–9999)를 벗어난 경우
    pub fn from_naive(date: &NaiveDate) -> FormResult<Self> {
        Self::new(date.month(), date.day(), date.year())
    }

    /// 실제 달력 날짜로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::InvalidDate` - 존재하지 않는 날짜 (예: 2월 30일)
    pub fn to_naive(&self) -> FormResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| FormError::InvalidDate(self.to_string()))
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = FormError;

    /// `[M]M/[D]D/YYYY` 형식을 해석합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_FORMAT
            .captures(s)
            .ok_or_else(|| FormError::InvalidDate(s.to_string()))?;

        let part = |i: usize| -> FormResult<u32> {
            caps[i]
                .parse::<u32>()
                .map_err(|_| FormError::InvalidDate(s.to_string()))
        };

        Self::new(part(1)?, part(2)?, part(3)? as i32)
    }
}
