//! # Domain Layer Module
//!
//! 폼 유틸리티가 다루는 값 객체와 서버 데이터 계약을 정의합니다.
//! 모든 값은 호출 범위 안에서만 존재하며 영속되지 않습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! domain/
//! ├── dto/       - 서버와 주고받는 요청/응답 구조
//! └── models/    - 날짜·시간 표시 값 객체
//! ```

pub mod dto;
pub mod models;
