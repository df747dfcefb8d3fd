//! 시간 표시 값 객체

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::errors::{FormError, FormResult};
use crate::services::validation::rules::TIME_FORMAT;

/// 오전/오후 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// `H:MM AM/PM`으로 표시되는 12시간제 시각
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime {
    /// # Errors
    ///
    /// * `FormError::InvalidTime` - 시(1–12) 또는 분(0–59)이 범위를 벗어난 경우
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> FormResult<Self> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(FormError::InvalidTime(format!("{}:{:02} {}", hour, minute, meridiem)));
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// 24시간제 시각을 변환합니다. 자정은 `12:00 AM`, 정오는 `12:00 PM`입니다.
    pub fn from_naive(time: &NaiveTime) -> Self {
        let (is_pm, hour) = time.hour12();
        Self {
            hour,
            minute: time.minute(),
            meridiem: if is_pm { Meridiem::Pm } else { Meridiem::Am },
        }
    }

    pub fn to_naive(&self) -> NaiveTime {
        let hour24 = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        NaiveTime::from_hms_opt(hour24, self.minute, 0).unwrap_or_default()
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

impl FromStr for ClockTime {
    type Err = FormError;

    /// `[H]H:MM AM/PM` 형식을 해석합니다. 오전/오후 표기는 대소문자를 구분하지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::InvalidTime(s.to_string());
        let caps = TIME_FORMAT.captures(s).ok_or_else(invalid)?;

        let hour = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let minute = caps[2].parse::<u32>().map_err(|_| invalid())?;
        let meridiem = if caps[3].eq_ignore_ascii_case("PM") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        };

        Self::new(hour, minute, meridiem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_from_naive_twelve_hour_clock() {
        assert_eq!(ClockTime::from_naive(&hm(0, 5)).to_string(), "12:05 AM");
        assert_eq!(ClockTime::from_naive(&hm(9, 7)).to_string(), "9:07 AM");
        assert_eq!(ClockTime::from_naive(&hm(12, 0)).to_string(), "12:00 PM");
        assert_eq!(ClockTime::from_naive(&hm(23, 59)).to_string(), "11:59 PM");
    }

    #[test]
    fn test_parse_display_format() {
        let time: ClockTime = "9:05 pm".parse().unwrap();

        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.meridiem(), Meridiem::Pm);
        assert_eq!(time.to_string(), "9:05 PM");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert!("13:00 PM".parse::<ClockTime>().is_err());
        assert!("9:5 AM".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_to_naive() {
        assert_eq!("12:30 AM".parse::<ClockTime>().unwrap().to_naive(), hm(0, 30));
        assert_eq!("12:30 PM".parse::<ClockTime>().unwrap().to_naive(), hm(12, 30));
        assert_eq!("1:15 PM".parse::<ClockTime>().unwrap().to_naive(), hm(13, 15));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ClockTime::new(0, 0, Meridiem::Am).is_err());
        assert!(ClockTime::new(13, 0, Meridiem::Pm).is_err());
        assert!(ClockTime::new(1, 60, Meridiem::Pm).is_err());
    }
}
