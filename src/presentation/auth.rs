use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::presentation::config::AuthSettings;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";
pub const FUNCTION_KEY_QUERY: &str = "code";

/// Function-level key check. A no-op when no key is configured.
pub async fn function_key_middleware(
    State(auth): State<AuthSettings>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = auth.function_key.as_deref().filter(|k| !k.is_empty()) else {
        return next.run(request).await;
    };

    let from_header = request
        .headers()
        .get(FUNCTION_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| keys_match(expected, v));

    let from_query = request.uri().query().is_some_and(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .any(|(name, value)| name == FUNCTION_KEY_QUERY && keys_match(expected, &value))
    });

    if from_header || from_query {
        next.run(request).await
    } else {
        tracing::warn!(path = %request.uri().path(), "Rejected request without valid function key");
        (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
    }
}

/// Constant-time in the key contents; only the length can leak.
pub fn keys_match(expected: &str, candidate: &str) -> bool {
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
