/// Request rejections surfaced as `400 Bad Request` with the display text as body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid json")]
    InvalidJson,
    #[error("invalid count")]
    InvalidCount,
    #[error("missing urls")]
    MissingUrls,
    #[error("missing deployment")]
    MissingDeployment,
}
