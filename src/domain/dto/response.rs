use serde::{Deserialize, Deserializer, Serialize};

/// 모든 서버 엔드포인트가 반환하는 응답 봉투
///
/// ```json
/// { "HasErrors": false, "ErrorMessage": "", "Items": ["A", "B"] }
/// ```
///
/// `Items`는 목록 채우기 호출에서만 존재하며 생략되거나 `null`일 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseEnvelope {
    /// 서버가 요청 처리에 실패했는지 여부
    #[serde(default, alias = "hasErrors", deserialize_with = "null_as_false")]
    pub has_errors: bool,

    /// 사용자에게 표시할 에러 메시지
    #[serde(default, alias = "errorMessage")]
    pub error_message: Option<String>,

    /// 목록에 채울 항목들
    #[serde(default, alias = "items", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl ResponseEnvelope {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: Some(items.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            has_errors: true,
            error_message: Some(message.into()),
            items: None,
        }
    }

    /// 항목 목록. 응답에 `Items`가 없으면 빈 슬라이스
    pub fn items(&self) -> &[String] {
        self.items.as_deref().unwrap_or_default()
    }

    /// 에러 메시지. 없으면 빈 문자열
    pub fn error_message(&self) -> &str {
        self.error_message.as_deref().unwrap_or_default()
    }
}

// `null`은 값이 없는 것과 같이 `false`로 취급
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
