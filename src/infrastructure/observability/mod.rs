mod init_tracing;
mod log_redaction;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use log_redaction::{preview_for_log, redact_secrets};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
