//! 메모리 기반 컨트롤 구현
//!
//! 실제 화면 없이 검증기와 원격 헬퍼를 구동할 수 있도록 텍스트 입력, 목록, 폼을 흉내 냅니다.

use std::cell::Cell;

use super::{FormSource, ListControl, SelectOption, TextField};
use crate::domain::dto::FormField;

/// 텍스트 입력 컨트롤
#[derive(Debug, Default)]
pub struct TextInput {
    value: Option<String>,
    focused: Cell<bool>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            focused: Cell::new(false),
        }
    }

    /// 값이 설정되지 않은 컨트롤
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// 마지막 검증 실패로 포커스를 받았는지 여부
    pub fn has_focus(&self) -> bool {
        self.focused.get()
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }
}

impl TextField for TextInput {
    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn focus(&self) {
        self.focused.set(true);
    }
}

/// 드롭다운 목록 컨트롤
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectList {
    options: Vec<SelectOption>,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// 옵션 값들을 순서대로 반환합니다.
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl ListControl for SelectList {
    fn clear_options(&mut self) {
        self.options.clear();
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.options.push(SelectOption::new(value, label));
    }

    fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

/// 폼 안의 컨트롤 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub name: String,
    pub value: Option<String>,
    pub hidden: bool,
    pub disabled: bool,
}

impl FormControl {
    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            hidden: false,
            disabled: false,
        }
    }

    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::input(name, value)
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// 컨트롤 목록으로 구성된 폼
#[derive(Debug, Default, Clone)]
pub struct HtmlForm {
    controls: Vec<FormControl>,
}

impl HtmlForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, control: FormControl) -> Self {
        self.controls.push(control);
        self
    }

    pub fn push(&mut self, control: FormControl) {
        self.controls.push(control);
    }
}

impl FormSource for HtmlForm {
    fn serialize_array(&self) -> Vec<FormField> {
        self.controls
            .iter()
            .filter(|c| !c.disabled && !c.name.is_empty())
            .filter_map(|c| c.value.as_ref().map(|v| FormField::new(&c.name, v)))
            .collect()
    }

    fn hidden_value(&self, name: &str) -> Option<String> {
        self.controls
            .iter()
            .find(|c| c.hidden && c.name == name)
            .and_then(|c| c.value.clone())
    }
}
