//! restcall
//!
//! A small helper for issuing REST-style HTTP calls against a configured
//! base origin. Given a logical [`EndpointCall`] — a path template, named
//! path/query parameters, and a desired response shape — it builds the
//! concrete request, executes it through an injected transport, and
//! normalizes both success and error outcomes:
//!
//! - URL template substitution (`/items/:id`) and ordered query assembly
//! - response-shape coercion: JSON, text, boolean, or status-only
//! - unauthenticated-session redirection through an injected [`Navigator`]
//! - layered error-message extraction from nested response bodies
//!
//! # Example
//!
//! ```rust,no_run
//! use restcall::{ClientConfig, EndpointCall, QueryParam, RestClient};
//!
//! # async fn example() -> Result<(), restcall::RestError> {
//! let client = RestClient::new(
//!     ClientConfig::new("https://api.example.com")
//!         .with_error_message_paths(["error.message", "message"]),
//! );
//!
//! let call = EndpointCall::new("/items/:id")
//!     .query(QueryParam::path_only("id", "7"));
//! let item = client.fetch(&call).await?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod navigation;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use client::{RestClient, RestClientBuilder};
pub use config::ClientConfig;
pub use error::RestError;
pub use navigation::Navigator;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
pub use types::{EndpointCall, FetchOutcome, HttpMethod, QueryParam, ResponseShape};
