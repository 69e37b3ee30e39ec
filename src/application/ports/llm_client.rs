use async_trait::async_trait;

use crate::domain::Prompt;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `prompt` to the model named by `deployment` and returns the first
    /// choice's content, or an empty string when the model returns none.
    async fn complete(&self, deployment: &str, prompt: &Prompt) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
