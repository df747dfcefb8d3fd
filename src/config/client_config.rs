//! 클라이언트 및 실행 환경 설정 관리 모듈
//!
//! 원격 헬퍼가 사용하는 기본 URL, 요청 타임아웃, User-Agent 등을 환경 변수에서 읽어옵니다.

use std::env;
use std::time::Duration;

use log::debug;
use validator::Validate;

use crate::errors::{FormError, FormResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터를 반환합니다.
    ///
    /// `RUST_LOG`가 설정되지 않았을 때 `env_logger`에 전달됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 원격 헬퍼 설정
///
/// # Environment Variables
///
/// | 변수 | 설명 | 기본값 |
/// |------|------|--------|
/// | `ENVIRONMENT` | 실행 환경 | `production` |
/// | `FORM_BASE_URL` | 페이지에 `hiddenURL`이 없을 때 사용할 서버 기본 URL | 없음 |
/// | `FORM_REQUEST_TIMEOUT_SECS` | 요청 타임아웃(초) | 없음 (전송 계층 기본값) |
/// | `FORM_USER_AGENT` | HTTP User-Agent | `form_utils/<버전>` |
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ClientConfig {
    /// 실행 환경
    pub environment: Environment,

    /// 서버 기본 URL
    #[validate(url(message = "FORM_BASE_URL must be an absolute URL"))]
    pub base_url: Option<String>,

    /// 요청 타임아웃(초)
    #[validate(range(min = 1, message = "FORM_REQUEST_TIMEOUT_SECS must be at least 1"))]
    pub request_timeout_secs: Option<u64>,

    /// HTTP User-Agent 헤더 값
    #[validate(length(min = 1, message = "FORM_USER_AGENT cannot be empty"))]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            base_url: None,
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::ConfigError` - 숫자 파싱 실패 또는 검증 실패
    pub fn from_env() -> FormResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 로드합니다.
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않고 설정을 주입할 때 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> FormResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|s| Environment::from_str(&s))
            .unwrap_or(Environment::Production);

        let base_url = lookup("FORM_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let request_timeout_secs = match lookup("FORM_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                FormError::ConfigError(format!("FORM_REQUEST_TIMEOUT_SECS 파싱 실패: {}", e))
            })?),
            None => None,
        };

        let user_agent = lookup("FORM_USER_AGENT").unwrap_or_else(default_user_agent);

        let config = Self {
            environment,
            base_url,
            request_timeout_secs,
            user_agent,
        };

        config
            .validate()
            .map_err(|e| FormError::ConfigError(e.to_string()))?;

        debug!("클라이언트 설정 로드됨: {:?}", config);
        Ok(config)
    }

    /// 요청 타임아웃을 `Duration`으로 반환합니다.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_user_agent() -> String {
    format!("form_utils/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_per_environment() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url, None);
        assert_eq!(config.request_timeout(), None);
        assert!(config.user_agent.starts_with("form_utils/"));
    }

    #[test]
    fn test_values_are_read() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "staging"),
            ("FORM_BASE_URL", " http://localhost:5000/app "),
            ("FORM_REQUEST_TIMEOUT_SECS", "30"),
            ("FORM_USER_AGENT", "intranet-forms"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:5000/app"));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent, "intranet-forms");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[("FORM_BASE_URL", "not a url")]));
        assert!(matches!(result, Err(FormError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let unparsable = ClientConfig::from_lookup(lookup_from(&[("FORM_REQUEST_TIMEOUT_SECS", "soon")]));
        assert!(matches!(unparsable, Err(FormError::ConfigError(_))));

        let zero = ClientConfig::from_lookup(lookup_from(&[("FORM_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero, Err(FormError::ConfigError(_))));
    }

    #[test]
    fn test_empty_user_agent_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[("FORM_USER_AGENT", "")]));
        assert!(matches!(result, Err(FormError::ConfigError(_))));
    }
}
