//! GET endpoint wrappers and execution timing for the PokeAPI.
//!
//! # Overview
//! `get(base_url, headers)` produces a factory whose `wrap(handler)` returns
//! a `GetEndpoint`. Calling the endpoint builds the URL from a path segment
//! and query parameters, performs one blocking GET, logs its duration, and
//! passes the request descriptor and the raw response to the handler.
//! `timing::measure_time` wraps any function with start/end/elapsed logging.
//! The two are independent.
//!
//! # Design
//! - Endpoints are stateless; the only seam is the `Transport` trait, with
//!   `UreqTransport` as the real implementation.
//! - HTTP statuses are data. Only transport failures become `ApiError`.
//! - DTOs in `types` are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod logging;
pub mod pokeapi;
pub mod query;
pub mod timing;
pub mod transport;
pub mod types;

pub use endpoint::{get, Get, GetArgs, GetEndpoint};
pub use error::ApiError;
pub use http::{HttpMethod, HttpResponse, RequestInfo};
pub use pokeapi::{Fetched, PokeApi};
pub use query::{build_url, QueryParams};
pub use timing::{measure_time, Timed};
pub use transport::{Transport, UreqTransport};
pub use types::{NamedResource, Pokemon, SpeciesPage};
