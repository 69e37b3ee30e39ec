use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::payload::{bad_request, parse_object};
use crate::domain::SourceUrls;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn analyze_document_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let urls = match parse_object(&body).and_then(|payload| SourceUrls::from_payload(&payload)) {
        Ok(urls) => urls,
        Err(e) => return bad_request(e),
    };

    match state.document_analysis_service.analyze(&urls).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("analyze error: {}", e),
        )
            .into_response(),
    }
}
