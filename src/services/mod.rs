//! 폼 유틸리티의 기능을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 상태를 갖지 않으며, 호출자가 필요할 때 직접 호출합니다.
//!
//! # Modules
//!
//! - [`validation`] - 입력 컨트롤 검증기와 순수 검증 규칙
//! - [`formatting`] - 날짜·시간 표시 문자열 생성
//! - [`remote`] - 폼 제출과 목록 채우기
//! - [`notifier`] - 사용자 알림 capability
//!
//! # Examples
//!
//! ```rust,ignore
//! use form_utils::services::{formatting, notifier::LogNotifier, validation::FieldValidator};
//!
//! let notifier = LogNotifier;
//! let validator = FieldValidator::new(&notifier);
//! due_date.set_value(formatting::current_date_display());
//! assert!(validator.validate_date(Some(&due_date), "Due Date"));
//! ```

pub mod formatting;
pub mod notifier;
pub mod remote;
pub mod validation;
