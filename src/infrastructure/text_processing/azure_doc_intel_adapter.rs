use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{DocumentAnalyzer, DocumentAnalyzerError};
use crate::domain::{AnalyzedDocument, AnalyzedPage};
use crate::infrastructure::observability::redact_secrets;

pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);
pub const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
pub const MAX_BACKOFF: Duration = Duration::from_secs(10);
pub const API_VERSION: &str = "2024-11-30";
pub const READ_MODEL_ID: &str = "prebuilt-read";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "Operation-Location";

pub struct AzureDocIntelAdapter {
    client: Client,
    endpoint: String,
    api_key: String,
    poll_timeout: Duration,
}

impl AzureDocIntelAdapter {
    pub fn new(client: Client, endpoint: &str, api_key: &str, poll_timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            poll_timeout,
        }
    }

    pub fn analyze_url(&self) -> String {
        format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}",
            self.endpoint, READ_MODEL_ID, API_VERSION
        )
    }

    async fn submit(&self, source_url: &str) -> Result<String, DocumentAnalyzerError> {
        let response = self
            .client
            .post(self.analyze_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(&serde_json::json!({ "urlSource": source_url }))
            .send()
            .await
            .map_err(|e| DocumentAnalyzerError::SubmitFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentAnalyzerError::SubmitFailed(format!(
                "returned {status}: {text}"
            )));
        }

        response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .ok_or_else(|| {
                DocumentAnalyzerError::InvalidResponse(format!(
                    "{status} response without {OPERATION_LOCATION_HEADER} header"
                ))
            })
    }

    async fn poll_once(&self, operation_url: &str) -> Result<PollOutcome, DocumentAnalyzerError> {
        let response = self
            .client
            .get(operation_url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| DocumentAnalyzerError::PollFailed(e.to_string()))?;

        let retry_after = retry_after(response.headers());
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(PollOutcome::Pending(retry_after));
        }
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentAnalyzerError::PollFailed(format!(
                "returned {status}: {text}"
            )));
        }

        let operation: AnalyzeOperation = response
            .json()
            .await
            .map_err(|e| DocumentAnalyzerError::InvalidResponse(e.to_string()))?;

        match operation.status.as_str() {
            "succeeded" => Ok(PollOutcome::Done(
                operation.analyze_result.unwrap_or_default(),
            )),
            "failed" | "canceled" => Err(DocumentAnalyzerError::AnalysisFailed(
                operation
                    .error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| format!("operation {}", operation.status)),
            )),
            _ => Ok(PollOutcome::Pending(retry_after)),
        }
    }

    async fn poll_until_complete(
        &self,
        operation_url: &str,
    ) -> Result<AnalyzeResult, DocumentAnalyzerError> {
        let polling = async {
            let mut backoff = INITIAL_BACKOFF;
            loop {
                match self.poll_once(operation_url).await? {
                    PollOutcome::Done(result) => return Ok(result),
                    PollOutcome::Pending(retry_after) => {
                        tokio::time::sleep(retry_after.unwrap_or(backoff)).await;
                        backoff = (backoff * 2).min(MAX_BACKOFF);
                    }
                }
            }
        };

        tokio::time::timeout(self.poll_timeout, polling)
            .await
            .map_err(|_| DocumentAnalyzerError::Timeout(self.poll_timeout.as_secs()))?
    }
}

enum PollOutcome {
    Done(AnalyzeResult),
    /// Carries the service's `Retry-After` hint, if any.
    Pending(Option<Duration>),
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[async_trait]
impl DocumentAnalyzer for AzureDocIntelAdapter {
    #[tracing::instrument(skip(self, url), fields(url = %redact_secrets(url)), err(Display))]
    async fn analyze(&self, url: &str) -> Result<AnalyzedDocument, DocumentAnalyzerError> {
        let operation_url = self.submit(url).await?;
        tracing::debug!("Analysis submitted, polling operation");

        let result = self.poll_until_complete(&operation_url).await?;
        let document = AnalyzedDocument::from(result);

        tracing::debug!(pages = document.pages.len(), "Analysis succeeded");
        Ok(document)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeOperation {
    pub status: String,
    #[serde(rename = "analyzeResult")]
    pub analyze_result: Option<AnalyzeResult>,
    pub error: Option<OperationError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub pages: Vec<DocumentPage>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentPage {
    #[serde(default)]
    pub lines: Vec<DocumentLine>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentLine {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct OperationError {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

impl From<AnalyzeResult> for AnalyzedDocument {
    fn from(result: AnalyzeResult) -> Self {
        Self {
            pages: result
                .pages
                .into_iter()
                .map(|page| AnalyzedPage {
                    lines: page.lines.into_iter().map(|line| line.content).collect(),
                })
                .collect(),
        }
    }
}
