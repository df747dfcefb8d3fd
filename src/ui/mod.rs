//! # UI 컨트롤 추상화
//!
//! 검증기와 원격 헬퍼가 다루는 입력 컨트롤의 계약을 trait으로 정의합니다.
//! 실제 화면 요소는 호스트가 구현하며, [`controls`] 모듈은 테스트와 CLI에서 쓰는
//! 메모리 기반 구현을 제공합니다.
//!
//! | trait | 요구 동작 |
//! |-------|-----------|
//! | [`TextField`] | 현재 텍스트 조회, 입력 포커스 이동 |
//! | [`ListControl`] | 옵션 전체 삭제, 옵션 추가, 옵션 조회 |
//! | [`FormSource`] | 폼 필드 직렬화, 숨김 필드 조회 |

pub mod controls;

pub use controls::{FormControl, HtmlForm, SelectList, TextInput};

use crate::domain::dto::FormField;

/// 단일 행 또는 여러 행 텍스트 입력 컨트롤
pub trait TextField {
    /// 현재 입력된 텍스트. 컨트롤에 값이 없으면 `None`
    fn value(&self) -> Option<String>;

    /// 입력 포커스를 이 컨트롤로 이동합니다.
    fn focus(&self);
}

/// 목록(드롭다운) 컨트롤의 옵션 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// 값과 표시 이름이 모두 빈 옵션
    pub fn blank() -> Self {
        Self::new("", "")
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.label.is_empty()
    }
}

/// 선택 가능한 옵션 목록을 가진 컨트롤
pub trait ListControl {
    /// 모든 옵션을 제거합니다.
    fn clear_options(&mut self);

    /// 목록 끝에 옵션을 추가합니다.
    fn append_option(&mut self, value: &str, label: &str);

    /// 현재 옵션들을 순서대로 반환합니다.
    fn options(&self) -> &[SelectOption];
}

/// 서버로 제출할 수 있는 폼
pub trait FormSource {
    /// 제출 대상 필드를 문서 순서대로 이름/값 쌍으로 직렬화합니다.
    ///
    /// 비활성화되었거나 이름 또는 값이 없는 컨트롤은 제외됩니다.
    fn serialize_array(&self) -> Vec<FormField>;

    /// 이름으로 숨김 필드의 값을 조회합니다.
    fn hidden_value(&self, name: &str) -> Option<String>;
}
