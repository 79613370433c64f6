//! 核心响应处理模块

use std::collections::BTreeMap;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// 函数返回值：状态码、响应头、字符串响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl FunctionResponse {
    /// 200 + JSON 响应体
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(Self::json_body(body))
    }

    /// 已经序列化好的 JSON
    pub fn json_body(body: String) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: BTreeMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]),
            body,
        }
    }

    /// 500 + 纯文本错误描述
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            headers: BTreeMap::from([("Content-Type".to_string(), CONTENT_TYPE_TEXT.to_string())]),
            body: message.into(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT.as_u16(),
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in self.headers {
            match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!(header = %name, "dropping invalid response header"),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_json_response() {
        let response = FunctionResponse::json(&serde_json::json!({"message": "hi"})).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.header("content-type"), Some(CONTENT_TYPE_JSON));
        assert_eq!(response.body, r#"{"message":"hi"}"#);
        assert!(response.is_success());
    }

    #[test]
    fn test_into_http_response_keeps_headers() {
        let response = FunctionResponse::json_body("[]".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);

        let response = FunctionResponse::server_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_TEXT);
    }

    #[test]
    fn test_envelope_field_names() {
        let value = serde_json::to_value(FunctionResponse::no_content()).unwrap();
        assert_eq!(value["statusCode"], 204);
        assert!(value["headers"].as_object().unwrap().is_empty());
    }
}
