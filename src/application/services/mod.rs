mod document_analysis_service;
mod text_processing_service;
mod upload_url_service;

pub use document_analysis_service::{
    AnalysisError, DI_ENDPOINT_VAR, DI_KEY_VAR, DocumentAnalysisService,
};
pub use text_processing_service::{
    DEFAULT_OPENAI_API_VERSION, OPENAI_API_VERSION_VAR, OPENAI_ENDPOINT_VAR, OPENAI_KEY_VAR,
    TextProcessingError, TextProcessingService,
};
pub use upload_url_service::{
    STORAGE_ACCOUNT_VAR, STORAGE_CONTAINER_VAR, STORAGE_ENDPOINT_VAR, STORAGE_KEY_VAR,
    UploadUrlError, UploadUrlService,
};
