//! 폼 유틸리티 라이브러리
//!
//! 사내 업무용 데이터 입력 화면에서 사용하는 클라이언트 측 폼 도우미입니다.
//! 필드 검증, 날짜/시간 표시 문자열 생성, 서버와의 JSON 폼 통신을 제공합니다.
//!
//! # Features
//!
//! - **필드 검증**: 필수 입력, 숫자/정수/양수, 최대 길이, M/D/YYYY 날짜, H:MM AM/PM 시간
//! - **포맷팅**: 현재 날짜·시간을 입력 필드 형식 문자열로 변환
//! - **원격 폼**: 폼 직렬화 후 POST 제출, JSON 응답으로 선택 목록 채우기
//! - **알림**: 검증/서버 에러를 주입된 [`Notifier`](services::notifier::Notifier)로 전달
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │       CLI       │ ← 명령줄 진입점
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 포맷팅, 원격 폼
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  UI 추상화/DTO   │ ← 텍스트 필드, 선택 목록, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Transport    │ ← reqwest HTTP
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use form_utils::services::notifier::LogNotifier;
//! use form_utils::services::validation::FieldValidator;
//! use form_utils::ui::TextInput;
//!
//! let notifier = LogNotifier;
//! let validator = FieldValidator::new(&notifier);
//! let quantity = TextInput::new("12");
//!
//! assert!(validator.validate_is_integral(&quantity, "Quantity"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod ui;
pub mod utils;
