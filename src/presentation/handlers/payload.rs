use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::domain::ValidationError;

/// Parses a request body that must be a JSON object.
pub fn parse_object(body: &[u8]) -> Result<Value, ValidationError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => Ok(value),
        _ => Err(ValidationError::InvalidJson),
    }
}

pub fn bad_request(error: ValidationError) -> Response {
    tracing::warn!(reason = %error, "Rejected request");
    (StatusCode::BAD_REQUEST, error.to_string()).into_response()
}
