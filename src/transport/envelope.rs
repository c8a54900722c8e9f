use serde_json::{Map, Value};

use crate::domain::ApiError;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level wrapper every ZenSend JSON reply is expected to carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"success": ...}`: the operation-specific payload.
    Success(Value),
    /// `{"failure": {...}}`, already mapped onto the HTTP status.
    Failure(ApiError),
    /// Neither key was present.
    Unrecognized,
}

/// Whether a `Content-Type` header announces a JSON body.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains(JSON_CONTENT_TYPE))
}

/// Decode a JSON body into an [`Envelope`].
///
/// Only malformed JSON is an error. A `success` key wins over `failure`; `null` values
/// count as absent.
pub fn decode_envelope(status: u16, body: &str) -> Result<Envelope, TransportError> {
    let parsed: Value = serde_json::from_str(body)?;

    let Value::Object(mut fields) = parsed else {
        return Ok(Envelope::Unrecognized);
    };

    match fields.remove("success") {
        Some(Value::Null) | None => {}
        Some(success) => return Ok(Envelope::Success(success)),
    }

    match fields.remove("failure") {
        Some(Value::Object(failure)) => Ok(Envelope::Failure(decode_failure(status, &failure))),
        Some(Value::Null) | None => Ok(Envelope::Unrecognized),
        Some(_) => Ok(Envelope::Failure(ApiError::from_status(status))),
    }
}

// Fields of the wrong JSON type are dropped rather than failing the call.
fn decode_failure(status: u16, failure: &Map<String, Value>) -> ApiError {
    let text = |key: &str| failure.get(key).and_then(Value::as_str).map(str::to_owned);
    let pence = |key: &str| failure.get(key).and_then(Value::as_f64);

    ApiError {
        status_code: status,
        fail_code: text("failcode"),
        parameter: text("parameter"),
        cost_in_pence: pence("cost_in_pence"),
        new_balance_in_pence: pence("new_balance_in_pence"),
    }
}
