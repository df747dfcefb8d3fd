//! # Data Transfer Objects (DTO) Module
//!
//! 서버와 주고받는 데이터 계약을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── request.rs     # 폼 제출 시 전송하는 이름/값 쌍
//! └── response.rs    # 모든 엔드포인트가 반환하는 응답 봉투
//! ```
//!
//! ## 서버 계약
//!
//! | 호출 | 메서드 | 요청 본문 | 응답 |
//! |------|--------|-----------|------|
//! | 폼 제출 | `POST` | url-encoded `FormField` 목록 | `{ HasErrors, ErrorMessage }` |
//! | 목록 채우기 | `GET` | 없음 | `{ HasErrors, ErrorMessage, Items }` |

pub mod request;
pub mod response;

pub use request::FormField;
pub use response::ResponseEnvelope;
