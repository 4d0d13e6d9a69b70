//! Call descriptions and normalized results.
//!
//! An [`EndpointCall`] is a plain-data description of one REST-style call:
//! a path template, a method, optional header overrides, and the values
//! that fill `:token` placeholders or become the query string. Calls are
//! value objects — built once, consumed by a single
//! [`fetch`](crate::client::RestClient::fetch), then discarded.
//!
//! All types derive `Serialize`/`Deserialize` so endpoint descriptions can
//! live in application configuration and be handed to the helper as opaque
//! records.

use serde::{Deserialize, Serialize};

/// HTTP method for a call. Defaults to `Get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-declared interpretation of a successful response body.
///
/// `Boolean` and `Status` never decode the body — they only assert that the
/// exchange succeeded. Unrecognized values in configuration records
/// deserialize to `Status` for the same assert-only behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    #[default]
    Json,
    Text,
    Boolean,
    Status,
}

impl<'de> Deserialize<'de> for ResponseShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shape = String::deserialize(deserializer)?;
        Ok(match shape.as_str() {
            "json" => Self::Json,
            "text" => Self::Text,
            "boolean" => Self::Boolean,
            // "status" and anything unrecognized are assert-only.
            _ => Self::Status,
        })
    }
}

/// A named query parameter.
///
/// `value: None` means the value is absent and the whole entry is skipped
/// during URL assembly; `Some(Value::Null)` is a present-but-empty value and
/// renders as an empty string. Entries with an empty `name` are skipped as
/// well — never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// When set, the parameter fills the `:name` token in the URL instead of
    /// being appended to the query string.
    #[serde(default)]
    pub url_replace_only: bool,
}

impl QueryParam {
    /// A regular query-string parameter.
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            url_replace_only: false,
        }
    }

    /// A path-substitution-only parameter: fills `:name` in the URL and is
    /// excluded from the query string.
    pub fn path_only(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            url_replace_only: true,
        }
    }
}

/// A logical call description, consumed once by
/// [`RestClient::fetch`](crate::client::RestClient::fetch).
///
/// `raw_data` is an ordered list rather than a map so token substitution is
/// deterministic when one key is a prefix of another (`:id` vs `:idx`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointCall {
    /// Origin-relative path template, e.g. `/items/:id`.
    pub path: String,
    #[serde(default)]
    pub method: HttpMethod,
    /// Header overrides, applied after the built-in
    /// `content-type: application/json` default.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    /// Key → value substitutions for `:key` path tokens. Only consulted when
    /// `query_params` is empty.
    #[serde(default)]
    pub raw_data: Vec<(String, serde_json::Value)>,
    #[serde(default)]
    pub query_params: Vec<QueryParam>,
    /// Request payload, serialized to JSON text for `Post` and `Put` only.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub shape: ResponseShape,
}

impl EndpointCall {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::default(),
            headers: Vec::new(),
            raw_data: Vec::new(),
            query_params: Vec::new(),
            body: None,
            shape: ResponseShape::default(),
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn raw(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.raw_data.push((key.into(), value.into()));
        self
    }

    pub fn query(mut self, param: QueryParam) -> Self {
        self.query_params.push(param);
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }
}

/// The normalized outcome of a successful exchange.
///
/// `Success` covers the `Boolean` and `Status` shapes, which only assert
/// that the call went through. `Redirected` is the unauthorized-redirect
/// path: a navigation side effect happened and the call produced neither a
/// decoded value nor an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Json(serde_json::Value),
    Text(String),
    Success,
    Redirected,
}
