//! HTTP request and response types passed to endpoint handlers.
//!
//! # Design
//! These types describe a single GET round-trip as plain data. `RequestInfo`
//! is built fresh for every call and handed to the handler by value;
//! `HttpResponse` is whatever the transport produced and is never modified
//! between the transport and the handler.
//!
//! All fields use owned types (`String`, `Vec`) so values can be returned
//! from handlers without lifetime concerns.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request. Endpoints only ever issue `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing the request an endpoint issued.
///
/// `headers` is `None` when the endpoint was created without headers,
/// mirroring how the endpoint was configured rather than what the HTTP
/// library added on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Option<Vec<(String, String)>>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` and passed to the handler untouched. Non-2xx
/// statuses are ordinary responses; interpreting them is up to the handler.
/// Header names are lowercase as received; header values that are not valid
/// UTF-8 are kept with the invalid bytes replaced by U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Deserialize the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Parse the body as untyped JSON.
    pub fn json_value(&self) -> Result<serde_json::Value, ApiError> {
        self.json()
    }

    /// Look up a response header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn method_renders_as_get() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Get.to_string(), "GET");
    }

    #[test]
    fn json_value_parses_body() {
        let value = response(r#"{"count":1302}"#).json_value().unwrap();
        assert_eq!(value["count"], 1302);
    }

    #[test]
    fn json_rejects_non_json_body() {
        let err = response("not json").json_value().unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response("{}");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }
}
