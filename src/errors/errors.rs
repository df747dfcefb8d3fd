//! 라이브러리 전역에서 사용하는 에러 시스템
//!
//! 원격 호출, 날짜/시간 파싱, 설정 로딩에서 발생하는 실패를 하나의 타입으로 통합합니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 서버가 보고한 검증 실패(`ServerValidationError`)와 네트워크 수준 실패(`TransportError`)는
//! 서로 다른 변형으로 구분되므로, 호출자는 메시지 내용을 검사하지 않고도 원인을 판별할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use form_utils::errors::FormError;
//!
//! match service.submit_form(&form, "/Orders/Save").await {
//!     Ok(()) => println!("저장 완료"),
//!     Err(FormError::ServerValidationError(msg)) => println!("서버 검증 실패: {}", msg),
//!     Err(FormError::TransportError(msg)) => println!("통신 실패: {}", msg),
//!     Err(e) => println!("기타 오류: {}", e),
//! }
//! ```

use thiserror::Error;

/// 라이브러리 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// 서버가 응답 봉투에서 `HasErrors == true`로 보고한 에러
    #[error("Server validation error: {0}")]
    ServerValidationError(String),

    /// 네트워크, HTTP 상태, 응답 디코딩 실패
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 날짜 표시 문자열 또는 입력값을 해석할 수 없음
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// 시간 표시 문자열을 해석할 수 없음
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// 설정값 누락 또는 형식 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 예상하지 못한 내부 오류
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl FormError {
    /// 사용자에게 그대로 표시할 원본 메시지를 반환합니다.
    ///
    /// `Display` 구현은 에러 종류 접두사를 붙이지만, 알림 창에는 서버가 보낸
    /// `ErrorMessage`나 전송 계층의 원본 에러 텍스트만 표시되어야 합니다.
    pub fn user_message(&self) -> &str {
        match self {
            FormError::ServerValidationError(msg)
            | FormError::TransportError(msg)
            | FormError::InvalidDate(msg)
            | FormError::InvalidTime(msg)
            | FormError::ConfigError(msg)
            | FormError::InternalError(msg) => msg,
        }
    }

    /// 서버가 보고한 실패인지 확인합니다.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, FormError::ServerValidationError(_))
    }

    /// 전송 계층 실패인지 확인합니다.
    pub fn is_transport(&self) -> bool {
        matches!(self, FormError::TransportError(_))
    }
}

impl From<reqwest::Error> for FormError {
    fn from(err: reqwest::Error) -> Self {
        FormError::TransportError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type FormResult<T> = Result<T, FormError>;

/// 외부 라이브러리 에러를 FormError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> FormResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> FormResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> FormResult<T> {
        self.map_err(|e| FormError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> FormResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FormError::InternalError(format!("{}: {}", f(), e)))
    }
}
