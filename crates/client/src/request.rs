//! Request building and response interpretation shared by every endpoint

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use carverjobs_types::JobFilter;

use crate::{ApiError, NETWORK_ERROR_MESSAGE};

/// Per-call overrides for the request helper
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Merged over the default headers, replacing same-named entries
    pub headers: HeaderMap,
    /// Sent as the JSON request body
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Headers sent with every request: JSON content type, plus the bearer
/// token when one is stored
pub fn default_headers(token: Option<&str>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ApiError::Storage("stored token is not a valid header value".to_string())
        })?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Merge caller headers over the defaults.
///
/// Every name present in `overrides` replaces all default values of that
/// name; names only in `defaults` are kept.
pub fn merge_headers(mut defaults: HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    for name in overrides.keys() {
        defaults.remove(name);
    }
    for (name, value) in overrides {
        defaults.append(name.clone(), value.clone());
    }
    defaults
}

/// Endpoint path for a job listing query, e.g. `/jobs?type=deck&limit=5`
pub fn jobs_endpoint(filter: &JobFilter) -> String {
    let pairs = filter.query_pairs();
    if pairs.is_empty() {
        return "/jobs".to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("/jobs?{query}")
}

/// Message for a failed response: the body's `message` when it is a
/// non-empty string, a generic status line otherwise
pub fn error_message(status: u16, data: &Value) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Interpret a response body.
///
/// JSON content types are parsed; anything else is wrapped as
/// `{"message": <body text>}`.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, ApiError> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if is_json {
        serde_json::from_slice(body)
            .map_err(|e| ApiError::Unexpected(format!("invalid JSON response body: {e}")))
    } else {
        Ok(serde_json::json!({ "message": String::from_utf8_lossy(body) }))
    }
}

/// Turn status and parsed body into the helper's result
pub fn check_status(status: reqwest::StatusCode, data: Value) -> Result<Value, ApiError> {
    if status.is_success() {
        return Ok(data);
    }
    let code = status.as_u16();
    let message = error_message(code, &data);
    tracing::warn!(status = code, message = %message, "API request failed");
    Err(ApiError::Status {
        status: code,
        message,
        data,
    })
}

/// Read and interpret a response
pub async fn read_response(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await.map_err(transport_error)?;
    let data = parse_body(content_type.as_deref(), &body)?;
    check_status(status, data)
}

/// Classify a reqwest failure
pub fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        tracing::warn!(error = %err, "{}", NETWORK_ERROR_MESSAGE);
        ApiError::Network(err.to_string())
    } else {
        tracing::error!(error = %err, "Unexpected HTTP client failure");
        ApiError::Unexpected(err.to_string())
    }
}
