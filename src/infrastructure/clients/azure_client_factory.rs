use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{
    BlobStore, BlobStoreError, ClientFactory, DocumentAnalyzer, DocumentAnalyzerError,
    DocumentIntelligenceCredentials, LlmClient, LlmClientError, OpenAiCredentials,
    StorageCredentials,
};
use crate::infrastructure::llm::AzureOpenAiClient;
use crate::infrastructure::storage::AzureBlobStore;
use crate::infrastructure::text_processing::AzureDocIntelAdapter;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds Azure adapters per request. The HTTP connection pools are shared;
/// credentials are not.
pub struct AzureClientFactory {
    http: Client,
    completion_http: Client,
    poll_timeout: Duration,
}

impl AzureClientFactory {
    pub fn new(poll_timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            completion_http: Client::builder().timeout(COMPLETION_TIMEOUT).build()?,
            poll_timeout,
        })
    }
}

impl ClientFactory for AzureClientFactory {
    fn blob_store(
        &self,
        credentials: StorageCredentials,
    ) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        Ok(Arc::new(AzureBlobStore::new(self.http.clone(), credentials)?))
    }

    fn document_analyzer(
        &self,
        credentials: DocumentIntelligenceCredentials,
    ) -> Result<Arc<dyn DocumentAnalyzer>, DocumentAnalyzerError> {
        Ok(Arc::new(AzureDocIntelAdapter::new(
            self.http.clone(),
            &credentials.endpoint,
            &credentials.api_key,
            self.poll_timeout,
        )))
    }

    fn llm_client(
        &self,
        credentials: OpenAiCredentials,
    ) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        Ok(Arc::new(AzureOpenAiClient::new(
            self.completion_http.clone(),
            credentials,
        )))
    }
}
