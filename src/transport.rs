//! HTTP transport abstraction.
//!
//! The helper never talks to the network directly: it builds a
//! [`TransportRequest`] and hands it to an injected [`HttpTransport`]. This
//! keeps the request/response pipeline deterministic and testable — tests
//! supply a transport that returns a synthetic response without going
//! through `reqwest`. [`ReqwestTransport`] is the default implementation.

use crate::error::RestError;
use crate::types::HttpMethod;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    /// Already-serialized JSON text, present only for `Post`/`Put` calls
    /// that carry a payload.
    pub body: Option<String>,
}

/// Transport-level response data with a fully-read body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Canonical reason phrase for the status, e.g. `Not Found`. Empty when
    /// the transport has none.
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Conventional 2xx success signal.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch-like primitive executing one request/response exchange.
///
/// Implementations read the body to completion; timeouts, retries, and
/// connection pooling are the implementation's concern, not the helper's.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, RestError>;
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Default transport over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing `reqwest::Client` (custom TLS, proxies, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, RestError> {
        let TransportRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method.into(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
