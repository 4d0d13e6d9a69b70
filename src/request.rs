//! Request construction: URL templating, query assembly, headers, body.
//!
//! Turns an [`EndpointCall`] plus the shared [`ClientConfig`] into a
//! concrete [`TransportRequest`]. Two substitution modes exist and are
//! mutually exclusive per call:
//!
//! - `raw_data` substitution runs only when `query_params` is empty, and
//!   replaces the first occurrence of each literal `:key` token with the
//!   rendered value, without percent-encoding (deliberate, reproducible
//!   behavior, not a safety feature);
//! - with a non-empty `query_params` list, entries flagged
//!   `url_replace_only` fill `:name` tokens and the rest become the query
//!   string in input order. `raw_data` is bypassed entirely.
//!
//! Malformed entries (empty name, absent value) are skipped, never raised.

use crate::config::ClientConfig;
use crate::error::RestError;
use crate::transport::TransportRequest;
use crate::types::{EndpointCall, HttpMethod};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// Build the concrete transport request for one call.
pub fn build(call: &EndpointCall, config: &ClientConfig) -> Result<TransportRequest, RestError> {
    // 1. Working URL
    let mut url = format!("{}{}", config.base_origin, call.path);
    let mut pairs: Vec<String> = Vec::new();

    if call.query_params.is_empty() {
        // 2. Raw substitution only: first occurrence of each :key token.
        for (key, value) in &call.raw_data {
            let token = format!(":{key}");
            url = url.replacen(&token, &render_value(value), 1);
        }
    } else {
        // 3. Query params: path fills plus ordered name=value pairs.
        for param in &call.query_params {
            let Some(value) = &param.value else { continue };
            if param.name.is_empty() {
                continue;
            }
            if param.url_replace_only {
                let token = format!(":{}", param.name);
                url = url.replacen(&token, &render_value(value), 1);
            } else {
                pairs.push(format!("{}={}", param.name, render_query_value(value)));
            }
        }
    }

    // 4. Append the accumulated query string.
    if !pairs.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&pairs.join("&"));
    }

    // 5. Headers: JSON default first, caller overrides win on collision.
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    apply_header_overrides(&mut headers, &call.headers);

    // 6. Body: serialized JSON text, Post/Put only.
    let body = match call.method {
        HttpMethod::Post | HttpMethod::Put => match &call.body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        },
        _ => None,
    };

    Ok(TransportRequest {
        method: call.method,
        url,
        headers,
        body,
    })
}

/// Render a JSON value for URL use: strings render bare, without quotes or
/// percent-encoding; `Null` renders as the empty string.
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Query-pair values additionally coerce every falsy value (`null`, `false`,
/// `0`, `""`) to the empty string. Token substitution does not.
fn render_query_value(value: &serde_json::Value) -> String {
    if crate::extract::is_truthy(value) {
        render_value(value)
    } else {
        String::new()
    }
}

/// Merge caller header overrides into `base`, overriding on name collision.
/// Entries that do not parse as header names/values are skipped.
fn apply_header_overrides(base: &mut HeaderMap, overrides: &[(String, String)]) {
    for (name, value) in overrides {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            base.insert(name, value);
        }
    }
}
