use serde::{Deserialize, Serialize};

/// 직렬화된 폼 필드 하나 (이름/값 쌍)
///
/// 폼 제출 시 필드 목록은 `name=value&...` 형태의 url-encoded 본문으로 전송됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name=value` 형식의 문자열에서 필드를 생성합니다.
    ///
    /// 첫 번째 `=`를 기준으로 나누며, `=`가 없으면 값은 빈 문자열입니다.
    pub fn parse_pair(pair: &str) -> Self {
        match pair.split_once('=') {
            Some((name, value)) => Self::new(name.trim(), value),
            None => Self::new(pair.trim(), ""),
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(FormField::parse_pair("Name=Widget"), FormField::new("Name", "Widget"));
        assert_eq!(FormField::parse_pair("Expr=a=b"), FormField::new("Expr", "a=b"));
        assert_eq!(FormField::parse_pair("Flag"), FormField::new("Flag", ""));
    }
}
