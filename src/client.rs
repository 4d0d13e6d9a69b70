//! The client tying the pipeline together.
//!
//! [`RestClient`] owns the shared [`ClientConfig`], an injected
//! [`HttpTransport`], and an optional [`Navigator`]. Its single public
//! operation, [`fetch`](RestClient::fetch), runs the whole exchange: build
//! the request, execute it, then coerce the success or normalize the
//! failure. Calls issued concurrently through one client are independent;
//! the only shared state is read-only.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::RestError;
use crate::navigation::Navigator;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{EndpointCall, FetchOutcome};
use crate::{extract, request, response};

/// REST request helper bound to one base origin.
#[derive(Clone)]
pub struct RestClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl RestClient {
    /// Client with the default `reqwest` transport and no navigator (401
    /// responses follow the normal error path).
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: Arc::new(ReqwestTransport::new()),
            navigator: None,
        }
    }

    pub fn builder(config: ClientConfig) -> RestClientBuilder {
        RestClientBuilder {
            config,
            transport: None,
            navigator: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one call and normalize its outcome.
    ///
    /// On 2xx the body is decoded per the call's shape. On 401 with a
    /// configured redirect template and navigator, the helper navigates to
    /// the template with `:returnUrl` filled by the percent-encoded current
    /// location and resolves to [`FetchOutcome::Redirected`] — no error is
    /// raised. Every other non-2xx response raises
    /// [`RestError::ApiError`] carrying the extracted message.
    pub async fn fetch(&self, call: &EndpointCall) -> Result<FetchOutcome, RestError> {
        // 1. Build the concrete request.
        let request = request::build(call, &self.config)?;
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        // 2. Execute through the transport.
        let response = self.transport.execute(request).await?;

        // 3. Success: decode per the requested shape.
        if response.is_ok() {
            return response::coerce(response, call.shape);
        }

        // 4. Unauthorized with a redirect target: navigate instead of raising.
        if response.status == 401
            && let (Some(template), Some(navigator)) =
                (&self.config.unauthorized_redirect, &self.navigator)
        {
            let location = navigator.current_location();
            let target = template.replacen(":returnUrl", &urlencoding::encode(&location), 1);
            tracing::debug!(target = %target, "unauthenticated response, redirecting");
            navigator.navigate_to(&target);
            return Ok(FetchOutcome::Redirected);
        }

        // 5. Everything else: normalized failure.
        let message = extract::extract_message(
            response.status,
            &response.status_text,
            &response.body,
            &self.config.error_message_paths,
        );
        tracing::debug!(status = response.status, message = %message, "request failed");
        Err(RestError::ApiError {
            status: response.status,
            message,
        })
    }
}

/// Builder for clients with a custom transport or navigator.
pub struct RestClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl RestClientBuilder {
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> RestClient {
        RestClient {
            config: self.config,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
            navigator: self.navigator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{TransportRequest, TransportResponse};
    use crate::types::{HttpMethod, QueryParam, ResponseShape};
    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use serde_json::json;
    use std::sync::Mutex;

    /// Transport returning a canned response and recording the request.
    struct CannedTransport {
        response: TransportResponse,
        seen: Mutex<Option<TransportRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, status_text: &str, body: &str) -> Self {
            Self {
                response: TransportResponse {
                    status,
                    status_text: status_text.to_string(),
                    headers: HeaderMap::new(),
                    body: body.as_bytes().to_vec(),
                },
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, RestError> {
            *self.seen.lock().unwrap() = Some(request);
            Ok(self.response.clone())
        }
    }

    struct RecordingNavigator {
        location: String,
        visited: Mutex<Option<String>>,
    }

    impl RecordingNavigator {
        fn at(location: &str) -> Self {
            Self {
                location: location.to_string(),
                visited: Mutex::new(None),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_location(&self) -> String {
            self.location.clone()
        }

        fn navigate_to(&self, url: &str) {
            *self.visited.lock().unwrap() = Some(url.to_string());
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new("https://api.example.com")
            .with_error_message_paths(["error.message", "message"])
    }

    #[tokio::test]
    async fn fetch_decodes_json_success() {
        let transport = Arc::new(CannedTransport::new(200, "OK", r#"{"a":1}"#));
        let client = RestClient::builder(config()).transport(transport).build();

        let outcome = client.fetch(&EndpointCall::new("/items")).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Json(json!({"a": 1})));
    }

    #[tokio::test]
    async fn fetch_sends_the_built_url_and_body() {
        let transport = Arc::new(CannedTransport::new(200, "OK", "true"));
        let client = RestClient::builder(config())
            .transport(transport.clone())
            .build();

        let call = EndpointCall::new("/items/:id")
            .method(HttpMethod::Put)
            .query(QueryParam::path_only("id", "7"))
            .body(json!({"done": true}))
            .shape(ResponseShape::Boolean);
        let outcome = client.fetch(&call).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Success);

        let seen = transport.seen.lock().unwrap().take().unwrap();
        assert_eq!(seen.url, "https://api.example.com/items/7");
        assert_eq!(seen.method, HttpMethod::Put);
        assert_eq!(seen.body.as_deref(), Some(r#"{"done":true}"#));
    }

    #[tokio::test]
    async fn fetch_raises_the_status_line_on_failure() {
        let transport = Arc::new(CannedTransport::new(
            500,
            "Internal Server Error",
            r#"{"error":{"message":"real reason"}}"#,
        ));
        let client = RestClient::builder(config()).transport(transport).build();

        let err = client.fetch(&EndpointCall::new("/items")).await.unwrap_err();
        match err {
            RestError::ApiError { status, message } => {
                assert_eq!(status, 500);
                // The body candidate is superseded by the status line.
                assert_eq!(message, "500 - Internal Server Error");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_with_navigator_redirects_instead_of_raising() {
        let transport = Arc::new(CannedTransport::new(401, "Unauthorized", ""));
        let navigator = Arc::new(RecordingNavigator::at("/app/items?tab=2"));
        let client = RestClient::builder(
            config().with_unauthorized_redirect("/login?:returnUrl"),
        )
        .transport(transport)
        .navigator(navigator.clone())
        .build();

        let outcome = client.fetch(&EndpointCall::new("/items")).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Redirected);
        assert_eq!(
            navigator.visited.lock().unwrap().as_deref(),
            Some("/login?%2Fapp%2Fitems%3Ftab%3D2")
        );
    }

    #[tokio::test]
    async fn unauthorized_without_navigator_follows_the_error_path() {
        let transport = Arc::new(CannedTransport::new(401, "Unauthorized", ""));
        let client = RestClient::builder(
            config().with_unauthorized_redirect("/login?:returnUrl"),
        )
        .transport(transport)
        .build();

        let err = client.fetch(&EndpointCall::new("/items")).await.unwrap_err();
        assert!(matches!(
            err,
            RestError::ApiError { status: 401, .. }
        ));
    }

    #[tokio::test]
    async fn unauthorized_without_template_follows_the_error_path() {
        let transport = Arc::new(CannedTransport::new(401, "Unauthorized", ""));
        let navigator = Arc::new(RecordingNavigator::at("/app"));
        let client = RestClient::builder(config())
            .transport(transport)
            .navigator(navigator.clone())
            .build();

        let err = client.fetch(&EndpointCall::new("/items")).await.unwrap_err();
        assert!(matches!(err, RestError::ApiError { status: 401, .. }));
        assert!(navigator.visited.lock().unwrap().is_none());
    }
}
