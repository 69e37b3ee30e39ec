use async_trait::async_trait;

use crate::domain::AnalyzedDocument;

/// Runs OCR over a remotely hosted document and waits for the result.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalyzedDocument, DocumentAnalyzerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentAnalyzerError {
    #[error("submit failed: {0}")]
    SubmitFailed(String),
    #[error("poll failed: {0}")]
    PollFailed(String),
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("analysis timed out after {0}s")]
    Timeout(u64),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
