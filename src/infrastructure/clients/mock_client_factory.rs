use std::sync::{Arc, Mutex};

use crate::application::ports::{
    BlobStore, BlobStoreError, ClientFactory, DocumentAnalyzer, DocumentAnalyzerError,
    DocumentIntelligenceCredentials, LlmClient, LlmClientError, OpenAiCredentials,
    StorageCredentials,
};
use crate::infrastructure::llm::MockLlmClient;
use crate::infrastructure::storage::{ContainerBehavior, MockBlobStore};
use crate::infrastructure::text_processing::MockDocumentAnalyzer;

/// Hands out shared mock adapters and remembers the credentials it was given.
pub struct MockClientFactory {
    pub blob_store: Arc<MockBlobStore>,
    pub document_analyzer: Arc<MockDocumentAnalyzer>,
    pub llm_client: Arc<MockLlmClient>,
    storage_credentials: Mutex<Vec<StorageCredentials>>,
    openai_credentials: Mutex<Vec<OpenAiCredentials>>,
}

impl Default for MockClientFactory {
    fn default() -> Self {
        Self::new(
            MockBlobStore::new(ContainerBehavior::Created),
            MockDocumentAnalyzer::new(),
            MockLlmClient::replying("Mock answer"),
        )
    }
}

impl MockClientFactory {
    pub fn new(
        blob_store: MockBlobStore,
        document_analyzer: MockDocumentAnalyzer,
        llm_client: MockLlmClient,
    ) -> Self {
        Self {
            blob_store: Arc::new(blob_store),
            document_analyzer: Arc::new(document_analyzer),
            llm_client: Arc::new(llm_client),
            storage_credentials: Mutex::new(Vec::new()),
            openai_credentials: Mutex::new(Vec::new()),
        }
    }

    pub fn storage_credentials(&self) -> Vec<StorageCredentials> {
        self.storage_credentials
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn openai_credentials(&self) -> Vec<OpenAiCredentials> {
        self.openai_credentials
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl ClientFactory for MockClientFactory {
    fn blob_store(
        &self,
        credentials: StorageCredentials,
    ) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        if let Ok(mut seen) = self.storage_credentials.lock() {
            seen.push(credentials);
        }
        Ok(self.blob_store.clone())
    }

    fn document_analyzer(
        &self,
        _credentials: DocumentIntelligenceCredentials,
    ) -> Result<Arc<dyn DocumentAnalyzer>, DocumentAnalyzerError> {
        Ok(self.document_analyzer.clone())
    }

    fn llm_client(
        &self,
        credentials: OpenAiCredentials,
    ) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        if let Ok(mut seen) = self.openai_credentials.lock() {
            seen.push(credentials);
        }
        Ok(self.llm_client.clone())
    }
}
