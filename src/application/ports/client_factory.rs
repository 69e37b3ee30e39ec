use std::sync::Arc;

use super::{
    BlobStore, BlobStoreError, DocumentAnalyzer, DocumentAnalyzerError, LlmClient, LlmClientError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCredentials {
    pub account: String,
    pub access_key: String,
    pub container: String,
    /// Overrides `https://{account}.blob.core.windows.net`.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIntelligenceCredentials {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiCredentials {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
}

/// Builds external clients from credentials resolved for the current request.
pub trait ClientFactory: Send + Sync {
    fn blob_store(
        &self,
        credentials: StorageCredentials,
    ) -> Result<Arc<dyn BlobStore>, BlobStoreError>;

    fn document_analyzer(
        &self,
        credentials: DocumentIntelligenceCredentials,
    ) -> Result<Arc<dyn DocumentAnalyzer>, DocumentAnalyzerError>;

    fn llm_client(
        &self,
        credentials: OpenAiCredentials,
    ) -> Result<Arc<dyn LlmClient>, LlmClientError>;
}
