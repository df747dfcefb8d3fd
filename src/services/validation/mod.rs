//! # 필드 검증 서비스
//!
//! 제출 전에 호출하는 입력 컨트롤 검증기들입니다.
//!
//! 모든 `validate_*` 메서드는 같은 계약을 따릅니다.
//!
//! - **인자**: 검증할 컨트롤과 메시지에 표시할 필드 이름
//! - **반환값**: 값이 유효하면 `true`
//! - **부수 효과**: 실패 시 알림을 표시하고 컨트롤로 포커스를 이동
//!
//! ```rust,ignore
//! let validator = FieldValidator::new(&notifier);
//! if !validator.validate_is_numeric(&quantity, "Quantity") {
//!     return;
//! }
//! ```
//!
//! 부수 효과 없는 판정만 필요하면 [`rules`] 모듈의 술어 함수를 사용합니다.

pub mod rules;

use log::debug;

use crate::services::notifier::Notifier;
use crate::ui::TextField;

/// 알림 capability를 주입받아 컨트롤을 검증하는 서비스
pub struct FieldValidator<'n> {
    notifier: &'n dyn Notifier,
}

impl<'n> FieldValidator<'n> {
    pub fn new(notifier: &'n dyn Notifier) -> Self {
        Self { notifier }
    }

    /// 컨트롤에 null이나 공백뿐인 문자열이 들어 있지 않은지 검증합니다.
    ///
    /// 컨트롤 자체가 없는 경우도 실패로 처리합니다.
    pub fn validate_is_not_empty(&self, control: Option<&dyn TextField>, field_name: &str) -> bool {
        let value = control.and_then(|c| c.value());
        if rules::is_not_empty(value.as_deref()) {
            return true;
        }
        self.fail(control, field_name, format!("Please enter {}.", field_name))
    }

    /// 값이 숫자인지 검증합니다. 숫자, `.`, `-` 외의 문자가 있으면 실패합니다.
    pub fn validate_is_numeric(&self, control: &dyn TextField, field_name: &str) -> bool {
        if rules::is_numeric(&current_text(control)) {
            return true;
        }
        self.fail(Some(control), field_name, format!("{} must be numeric.", field_name))
    }

    /// 값이 정수인지 검증합니다. 숫자와 `-` 외의 문자가 있으면 실패합니다.
    pub fn validate_is_integral(&self, control: &dyn TextField, field_name: &str) -> bool {
        if rules::is_integral(&current_text(control)) {
            return true;
        }
        self.fail(Some(control), field_name, format!("{} must be an integer.", field_name))
    }

    /// 값이 음수가 아닌지 검증합니다. 숫자와 `.` 외의 문자가 있으면 실패합니다.
    pub fn validate_is_positive(&self, control: &dyn TextField, field_name: &str) -> bool {
        if rules::is_positive(&current_text(control)) {
            return true;
        }
        self.fail(Some(control), field_name, format!("{} cannot be negative.", field_name))
    }

    /// 입력된 문자 수가 `length`를 넘지 않는지 검증합니다.
    pub fn validate_length(&self, control: &dyn TextField, length: usize, field_name: &str) -> bool {
        if rules::is_within_length(&current_text(control), length) {
            return true;
        }
        self.fail(
            Some(control),
            field_name,
            format!("{} cannot exceed {} characters.", field_name, length),
        )
    }

    /// 값이 `[M]M/[D]D/YYYY` 형식의 날짜인지 검증합니다.
    ///
    /// 컨트롤이 없거나 비어 있으면 통과합니다. 2월 30일 같은 날짜는 걸러내지 않습니다.
    pub fn validate_date(&self, control: Option<&dyn TextField>, field_name: &str) -> bool {
        let value = control.and_then(|c| c.value());
        if rules::is_date_format(value.as_deref()) {
            return true;
        }
        self.fail(
            control,
            field_name,
            format!("{} must be a valid date.\r\n\r\nFormat:  [M]M/[D]D/YYYY", field_name),
        )
    }

    /// 값이 `[H]H:MM AM/PM` 형식의 시간인지 검증합니다.
    ///
    /// 컨트롤이 없거나 비어 있으면 통과합니다.
    pub fn validate_time(&self, control: Option<&dyn TextField>, field_name: &str) -> bool {
        let value = control.and_then(|c| c.value());
        if rules::is_time_format(value.as_deref()) {
            return true;
        }
        self.fail(
            control,
            field_name,
            format!("{} must be a valid time.\r\n\r\nFormat:  [H]H:MM [A/P]M", field_name),
        )
    }

    fn fail(&self, control: Option<&dyn TextField>, field_name: &str, message: String) -> bool {
        debug!("필드 검증 실패: {} ({})", field_name, message.lines().next().unwrap_or_default());
        self.notifier.notify(Some(field_name), &message);
        if let Some(control) = control {
            control.focus();
        }
        false
    }
}

// 값이 없는 컨트롤은 빈 문자열로 취급
fn current_text(control: &dyn TextField) -> String {
    control.value().unwrap_or_default()
}
