//! GET endpoint wrappers.
//!
//! # Design
//! `get(base_url, headers)` is a factory: it captures the base URL and the
//! headers once, and `Get::wrap` turns a handler into a `GetEndpoint`. Each
//! `GetEndpoint::call` builds the full URL from `GetArgs`, performs one
//! blocking GET through the transport, logs how long it took, and invokes
//! the handler with the request descriptor, the untouched response, the
//! call arguments and any extra value the caller passed through.
//!
//! Endpoints hold no mutable state, so one endpoint can be called any number
//! of times.

use std::time::Instant;

use log::{debug, info};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse, RequestInfo};
use crate::query::{build_url, QueryParams};
use crate::transport::{Transport, UreqTransport};

/// Per-call arguments: the path segment and query string to append to the
/// endpoint's base URL. Both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetArgs {
    pub param: Option<String>,
    pub query_params: QueryParams,
}

impl GetArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn query_params(mut self, query_params: QueryParams) -> Self {
        self.query_params = query_params;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.query_params.push(key, value);
        self
    }
}

/// A configured GET request factory, not yet bound to a handler.
#[derive(Debug, Clone)]
pub struct Get<T = UreqTransport> {
    base_url: String,
    headers: Option<Vec<(String, String)>>,
    transport: T,
}

/// Create a GET factory for `base_url` sending `headers` on every request.
pub fn get(base_url: &str, headers: Option<Vec<(String, String)>>) -> Get {
    Get {
        base_url: base_url.to_string(),
        headers,
        transport: UreqTransport::new(),
    }
}

impl<T> Get<T> {
    /// Replace the transport used to execute requests.
    pub fn with_transport<U>(self, transport: U) -> Get<U> {
        Get {
            base_url: self.base_url,
            headers: self.headers,
            transport,
        }
    }

    /// Bind `handler` to this factory.
    ///
    /// The handler receives `(request, response, args, extra)` and its
    /// return value is passed back from `GetEndpoint::call`.
    pub fn wrap<F, A, R>(self, handler: F) -> GetEndpoint<F, T>
    where
        F: Fn(RequestInfo, HttpResponse, &GetArgs, A) -> R,
    {
        GetEndpoint { get: self, handler }
    }
}

/// A handler bound to a GET factory.
#[derive(Debug, Clone)]
pub struct GetEndpoint<F, T = UreqTransport> {
    get: Get<T>,
    handler: F,
}

impl<F, T: Transport> GetEndpoint<F, T> {
    /// Perform the request and invoke the handler.
    ///
    /// Transport failures are returned before the handler runs. Any HTTP
    /// status, including 4xx/5xx, is delivered to the handler.
    pub fn call<A, R>(&self, args: GetArgs, extra: A) -> Result<R, ApiError>
    where
        F: Fn(RequestInfo, HttpResponse, &GetArgs, A) -> R,
    {
        let request = self.request_for(&args);
        debug!("{} {}", request.method, request.url);

        let start = Instant::now();
        let response = self.get.transport.execute(&request)?;
        info!("Execution time: {:.4} seconds", start.elapsed().as_secs_f64());

        Ok((self.handler)(request, response, &args, extra))
    }

    /// Build the request descriptor `call` would send for `args`.
    pub fn request_for(&self, args: &GetArgs) -> RequestInfo {
        RequestInfo {
            url: build_url(&self.get.base_url, args.param.as_deref(), &args.query_params),
            method: HttpMethod::Get,
            headers: self.get.headers.clone(),
        }
    }
}
