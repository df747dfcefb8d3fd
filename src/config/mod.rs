//! # Configuration Module
//!
//! 원격 헬퍼와 실행 바이너리의 설정을 관리하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 한 곳에서 읽고 검증합니다.
//!
//! ## 모듈 구성
//!
//! - [`client_config`] - 실행 환경, 서버 기본 URL, 요청 타임아웃, User-Agent
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use form_utils::config::{ClientConfig, Environment};
//!
//! let env = Environment::current();
//! let config = ClientConfig::from_env()?;
//! println!("{:?} / {:?}", env, config.base_url);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"
//! export FORM_BASE_URL="http://localhost:5000/Intranet"
//! export FORM_REQUEST_TIMEOUT_SECS="30"
//! export FORM_USER_AGENT="intranet-forms/1.0"
//! ```

pub mod client_config;

pub use client_config::*;
