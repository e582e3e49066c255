//! The seam between endpoints and the network.
//!
//! # Design
//! Endpoints build a `RequestInfo` and hand it to a `Transport`, which
//! performs the blocking round-trip. `UreqTransport` is the real
//! implementation; tests substitute a stub that records requests and returns
//! canned responses.

use std::fmt;

use crate::error::ApiError;
use crate::http::{HttpResponse, RequestInfo};

/// Executes a GET request described by `RequestInfo`.
pub trait Transport {
    fn execute(&self, request: &RequestInfo) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &RequestInfo) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data. Only failures that prevent a response
/// (DNS, connect, TLS, I/O) become `ApiError::Transport`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &RequestInfo) -> Result<HttpResponse, ApiError> {
        let transport_err = |e: ureq::Error| ApiError::Transport {
            url: request.url.clone(),
            message: e.to_string(),
        };

        let mut builder = self.agent.get(&request.url);
        for (name, value) in request.headers.iter().flatten() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(transport_err)?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response.body_mut().read_to_string().map_err(transport_err)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Every header, in wire order. Values that are not valid UTF-8 are
/// converted lossily (invalid bytes become U+FFFD) rather than dropped.
fn header_pairs(headers: &ureq::http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
