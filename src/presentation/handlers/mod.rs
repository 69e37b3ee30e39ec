mod analyze_document;
mod health;
mod issue_upload_urls;
mod payload;
mod process_text;

pub use analyze_document::analyze_document_handler;
pub use health::health_handler;
pub use issue_upload_urls::issue_upload_urls_handler;
pub use process_text::{ProcessTextError, ProcessTextRequest, process_text_handler};
