//! # HTTP 전송 계층
//!
//! 원격 헬퍼가 서버와 통신하는 방법을 [`Transport`] trait으로 추상화합니다.
//! 운영 환경에서는 `reqwest` 기반의 [`HttpTransport`]를 사용하고,
//! 테스트에서는 응답을 미리 정해 둔 구현으로 대체합니다.
//!
//! ## 실패 매핑
//!
//! | 상황 | 결과 |
//! |------|------|
//! | 연결 실패, 타임아웃 | `FormError::TransportError(원본 에러)` |
//! | 2xx 이외의 HTTP 상태 | `FormError::TransportError(상태 설명)` |
//! | JSON 디코딩 실패 | `FormError::TransportError(파싱 에러)` |
//!
//! 서버가 `HasErrors`로 보고한 실패는 여기서 해석하지 않고 봉투 그대로 반환합니다.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CACHE_CONTROL};

use crate::config::ClientConfig;
use crate::domain::dto::{FormField, ResponseEnvelope};
use crate::errors::{FormError, FormResult};

/// 서버 응답 봉투를 주고받는 전송 계층
#[async_trait]
pub trait Transport: Send + Sync {
    /// 폼 필드를 url-encoded 본문으로 `POST`합니다.
    async fn post_form(&self, url: &str, fields: &[FormField]) -> FormResult<ResponseEnvelope>;

    /// 본문 없이 `GET`합니다.
    async fn get_json(&self, url: &str) -> FormResult<ResponseEnvelope>;
}

/// `reqwest` 기반 전송 계층
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정의 User-Agent와 타임아웃을 적용한 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::ConfigError` - HTTP 클라이언트 생성 실패
    pub fn from_config(config: &ClientConfig) -> FormResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FormError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client })
    }

    /// 미리 구성한 `reqwest` 클라이언트를 사용합니다.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn decode(response: reqwest::Response) -> FormResult<ResponseEnvelope> {
        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or(status.as_str());
            return Err(FormError::TransportError(reason.to_string()));
        }

        response
            .json::<ResponseEnvelope>()
            .await
            .map_err(|e| FormError::TransportError(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, fields: &[FormField]) -> FormResult<ResponseEnvelope> {
        debug!("POST {} ({}개 필드)", url, fields.len());

        let pairs: Vec<(&str, &str)> = fields.iter().map(FormField::as_pair).collect();
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .form(&pairs)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn get_json(&self, url: &str) -> FormResult<ResponseEnvelope> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::decode(response).await
    }
}
