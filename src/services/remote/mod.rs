//! # 원격 I/O 헬퍼
//!
//! 서버 응답 봉투(`{ HasErrors, ErrorMessage, Items? }`) 계약을 따르는 엔드포인트와 통신합니다.
//!
//! - [`transport`] - HTTP 전송 계층 추상화와 `reqwest` 구현
//! - [`form_service`] - 폼 제출, 목록 채우기, 목록 초기화

pub mod form_service;
pub mod transport;

pub use form_service::{BASE_URL_FIELD, RemoteFormService, reset_list};
pub use transport::{HttpTransport, Transport};
