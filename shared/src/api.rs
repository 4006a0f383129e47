//! Transport-independent half of the HTTP helper: request description,
//! URL building and the uniform response envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
pub const UPLOAD_TIMEOUT_MS: u32 = 60_000;
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// GET requests never carry a body
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: Method,
    /// Extra headers; these win over the JSON default
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub params: Vec<(String, String)>,
    pub timeout_ms: u32,
    pub include_credentials: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: Method::Get,
            headers: Vec::new(),
            body: None,
            params: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            include_credentials: true,
        }
    }
}

impl RequestConfig {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?);
        Ok(self)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Headers actually sent: JSON content type unless overridden
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        if !self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        headers.extend(self.headers.iter().cloned());
        headers
    }

    /// Serialized body, if the method allows one.
    ///
    /// String bodies are sent verbatim, everything else as JSON.
    pub fn body_text(&self) -> Option<String> {
        if !self.method.allows_body() {
            return None;
        }
        match self.body.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(raw) => Some(raw.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// `{base}{endpoint}` followed by the form-urlencoded `params`
pub fn build_url(base: &str, endpoint: &str, params: &[(String, String)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), endpoint);
    if params.is_empty() {
        return url;
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&query.finish());
    url
}

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains(JSON_CONTENT_TYPE))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timeout")]
    Timeout,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Status reported to callers; 0 when no response arrived
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Timeout => 408,
            ApiError::Http { status, .. } => *status,
            ApiError::Network(_) | ApiError::Parse(_) | ApiError::Serialize(_) => 0,
        }
    }

    /// Build the HTTP variant from a failed response body
    pub fn from_response(status: u16, status_text: &str, body: &str, json: bool) -> Self {
        let message = json
            .then(|| serde_json::from_str::<serde_json::Value>(body).ok())
            .flatten()
            .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text));
        ApiError::Http { status, message }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Timeout => "The request took too long to complete".to_string(),
            ApiError::Network(message) if message.is_empty() => {
                "Failed to connect to the server".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Uniform envelope every HTTP helper call resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status: u16,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn failed(error: &ApiError) -> Self {
        let summary = match error {
            ApiError::Timeout => "Request timeout".to_string(),
            ApiError::Http { .. } => "Request failed".to_string(),
            other => other.to_string(),
        };
        Self {
            success: false,
            status: error.status(),
            data: None,
            error: Some(summary),
            message: Some(error.detail()),
        }
    }

    pub fn from_result(result: Result<(u16, T), ApiError>, success_message: &str) -> Self {
        match result {
            Ok((status, data)) => Self::ok(status, data, success_message),
            Err(e) => Self::failed(&e),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .message
                .or(self.error)
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_params() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("q".to_string(), "a b&c".to_string()),
        ];
        assert_eq!(
            build_url("/api/", "/reports", &params),
            "/api/reports?page=2&q=a+b%26c"
        );
        assert_eq!(build_url("/api", "/users", &[]), "/api/users");
        assert_eq!(
            build_url("/api", "/users?active=1", &params[..1]),
            "/api/users?active=1&page=2"
        );
    }

    #[test]
    fn test_request_defaults_and_body() {
        let config = RequestConfig::default();
        assert_eq!(config.method, Method::Get);
        assert_eq!(config.timeout_ms, 30_000);
        assert!(config.include_credentials);
        assert_eq!(
            config.effective_headers(),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );

        let get_with_body = RequestConfig::default()
            .with_body(&serde_json::json!({"a": 1}))
            .unwrap();
        assert_eq!(get_with_body.body_text(), None);

        let post = RequestConfig::method(Method::Post)
            .with_body(&serde_json::json!({"a": 1}))
            .unwrap();
        assert_eq!(post.body_text().as_deref(), Some(r#"{"a":1}"#));

        let raw = RequestConfig::method(Method::Put).with_body(&"plain").unwrap();
        assert_eq!(raw.body_text().as_deref(), Some("plain"));
    }

    #[test]
    fn test_custom_content_type_replaces_default() {
        let config = RequestConfig::default().with_header("content-type", "text/plain");
        assert_eq!(config.effective_headers().len(), 1);
        assert_eq!(config.effective_headers()[0].1, "text/plain");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(ApiError::Timeout.status(), 408);
        assert_eq!(ApiError::Network("offline".into()).status(), 0);

        let timeout: ApiResponse<()> = ApiResponse::failed(&ApiError::Timeout);
        assert!(!timeout.success);
        assert_eq!(timeout.status, 408);
        assert_eq!(timeout.error.as_deref(), Some("Request timeout"));
    }

    #[test]
    fn test_http_error_message() {
        let from_json = ApiError::from_response(422, "Unprocessable", r#"{"message":"bad email"}"#, true);
        assert_eq!(
            from_json,
            ApiError::Http {
                status: 422,
                message: "bad email".to_string()
            }
        );
        let from_text = ApiError::from_response(500, "Internal Server Error", "boom", false);
        assert_eq!(from_text.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_from_result() {
        let ok = ApiResponse::from_result(Ok((200, vec![1, 2])), "Request successful");
        assert!(ok.success);
        assert_eq!(ok.clone().into_result(), Ok(vec![1, 2]));

        let err: ApiResponse<Vec<i32>> =
            ApiResponse::from_result(Err(ApiError::Parse("eof".into())), "Request successful");
        assert_eq!(err.status, 0);
        assert!(err.into_result().is_err());
    }

    #[test]
    fn test_content_type_detection() {
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(!is_json_content_type(Some("text/html")));
        assert!(!is_json_content_type(None));
    }
}
