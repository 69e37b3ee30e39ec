use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::payload::{bad_request, parse_object};
use crate::domain::UploadCount;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn issue_upload_urls_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let count = match parse_object(&body).and_then(|payload| UploadCount::from_payload(&payload)) {
        Ok(count) => count,
        Err(e) => return bad_request(e),
    };

    match state.upload_url_service.issue(count).await {
        Ok(urls) => (StatusCode::OK, Json(urls)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Issuing upload URLs failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("issue error: {}", e),
            )
                .into_response()
        }
    }
}
