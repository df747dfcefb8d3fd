//! 공통 유틸리티 함수 모듈
//!
//! 명령줄 실행에서 사용하는 터미널 출력 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들

pub mod display_terminal;
