mod analysis_result;
mod blob_name;
mod document_type;
mod prompt;
mod source_urls;
mod upload_count;
mod upload_grant;
mod validation_error;

pub use analysis_result::{AnalysisResult, AnalyzedDocument, AnalyzedPage};
pub use blob_name::{BlobName, UPLOAD_EXTENSION};
pub use document_type::DocumentType;
pub use prompt::{Prompt, PromptSource, SYSTEM_INSTRUCTION};
pub use source_urls::SourceUrls;
pub use upload_count::{MAX_UPLOAD_COUNT, UploadCount};
pub use upload_grant::{BlobPermissions, UPLOAD_CONTENT_TYPE, UPLOAD_TTL_MINUTES, UploadGrant};
pub use validation_error::ValidationError;
