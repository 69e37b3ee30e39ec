use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::payload::{bad_request, parse_object};
use crate::domain::{DocumentType, PromptSource, ValidationError};
use crate::infrastructure::observability::preview_for_log;
use crate::presentation::state::AppState;

/// Every field tolerates `null` or a non-string value, which reads as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTextRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub ocr_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub document_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub custom_prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deployment: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessTextError {
    pub error: &'static str,
    pub message: String,
}

impl ProcessTextRequest {
    fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let payload = parse_object(body)?;
        serde_json::from_value(payload).map_err(|_| ValidationError::InvalidJson)
    }

    pub fn ocr_text(&self) -> &str {
        self.ocr_text.as_deref().unwrap_or_default()
    }

    pub fn document_type(&self) -> &str {
        self.document_type
            .as_deref()
            .unwrap_or(DocumentType::GeneralText.label())
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn process_text_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match ProcessTextRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return bad_request(e),
    };

    let Some(deployment) = request.deployment.as_deref().filter(|d| !d.is_empty()) else {
        return bad_request(ValidationError::MissingDeployment);
    };

    let source = PromptSource::select(request.document_type(), request.custom_prompt.as_deref());
    tracing::debug!(
        deployment = %deployment,
        document_type = %request.document_type(),
        ocr_text = %preview_for_log(request.ocr_text()),
        "Processing OCR text"
    );

    match state
        .text_processing_service
        .process(deployment, &source, request.ocr_text())
        .await
    {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Text processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProcessTextError {
                    error: "openai",
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
