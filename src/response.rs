//! Response coercion: one transport response to one declared shape.
//!
//! Called only for 2xx responses; non-2xx handling lives in the client
//! (unauthorized redirect or error extraction).

use crate::error::RestError;
use crate::transport::TransportResponse;
use crate::types::{FetchOutcome, ResponseShape};

/// Decode a successful response per the requested shape.
///
/// `Boolean` and `Status` resolve to [`FetchOutcome::Success`] without ever
/// decoding the body, even when one is present.
pub fn coerce(response: TransportResponse, shape: ResponseShape) -> Result<FetchOutcome, RestError> {
    match shape {
        ResponseShape::Json => {
            let value = serde_json::from_slice(&response.body)?;
            Ok(FetchOutcome::Json(value))
        }
        ResponseShape::Text => Ok(FetchOutcome::Text(
            String::from_utf8_lossy(&response.body).into_owned(),
        )),
        ResponseShape::Boolean | ResponseShape::Status => Ok(FetchOutcome::Success),
    }
}
