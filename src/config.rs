//! Process-wide client configuration.
//!
//! A [`ClientConfig`] is set once at construction and shared read-only
//! across every call issued through the client: the base origin every path
//! is resolved against, the optional redirect template for unauthenticated
//! responses, and the ordered list of dotted paths probed against error
//! response bodies.

use serde::{Deserialize, Serialize};

/// Immutable configuration shared by all calls of one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base origin prefix, e.g. `https://api.example.com`. Concatenated
    /// verbatim with each call's path template.
    pub base_origin: String,
    /// Redirect-target template for 401 responses, containing a
    /// `:returnUrl` token, e.g. `/login?:returnUrl`.
    #[serde(default)]
    pub unauthorized_redirect: Option<String>,
    /// Ordered dotted property paths probed against parsed error bodies,
    /// e.g. `["error.message", "message"]`. Later paths win over earlier
    /// ones when several resolve.
    #[serde(default)]
    pub error_message_paths: Vec<String>,
}

impl ClientConfig {
    pub fn new(base_origin: impl Into<String>) -> Self {
        Self {
            base_origin: base_origin.into(),
            unauthorized_redirect: None,
            error_message_paths: Vec::new(),
        }
    }

    pub fn with_unauthorized_redirect(mut self, template: impl Into<String>) -> Self {
        self.unauthorized_redirect = Some(template.into());
        self
    }

    /// Set the error-message probe paths. The parameter is sequence-typed;
    /// a single path is the one-element list.
    pub fn with_error_message_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_message_paths = paths.into_iter().map(Into::into).collect();
        self
    }
}
