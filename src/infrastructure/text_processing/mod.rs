mod azure_doc_intel_adapter;
mod mock_document_analyzer;

pub use azure_doc_intel_adapter::{
    API_VERSION, AnalyzeOperation, AnalyzeResult, AzureDocIntelAdapter, DEFAULT_POLL_TIMEOUT,
    DocumentLine, DocumentPage, INITIAL_BACKOFF, MAX_BACKOFF, OperationError, READ_MODEL_ID,
};
pub use mock_document_analyzer::MockDocumentAnalyzer;
