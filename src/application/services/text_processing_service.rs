use std::sync::Arc;

use crate::application::ports::{
    ClientFactory, ConfigError, ConfigSource, LlmClientError, OpenAiCredentials, require,
};
use crate::domain::{Prompt, PromptSource};

pub const OPENAI_ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const OPENAI_KEY_VAR: &str = "AZURE_OPENAI_KEY";
pub const OPENAI_API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const DEFAULT_OPENAI_API_VERSION: &str = "2024-08-01-preview";

/// Turns raw OCR text into structured prose through a chat-completion model.
pub struct TextProcessingService {
    config: Arc<dyn ConfigSource>,
    clients: Arc<dyn ClientFactory>,
}

impl TextProcessingService {
    pub fn new(config: Arc<dyn ConfigSource>, clients: Arc<dyn ClientFactory>) -> Self {
        Self { config, clients }
    }

    #[tracing::instrument(skip(self, source, ocr_text))]
    pub async fn process(
        &self,
        deployment: &str,
        source: &PromptSource,
        ocr_text: &str,
    ) -> Result<String, TextProcessingError> {
        let prompt = Prompt::build(source, ocr_text);
        tracing::debug!(
            custom_prompt = matches!(source, PromptSource::Custom(_)),
            user_prompt_chars = prompt.user.chars().count(),
            "Built prompt"
        );

        let source_config = self.config.as_ref();
        let credentials = OpenAiCredentials {
            endpoint: require(source_config, OPENAI_ENDPOINT_VAR, None)?
                .trim_end_matches('/')
                .to_string(),
            api_key: require(source_config, OPENAI_KEY_VAR, None)?,
            api_version: require(
                source_config,
                OPENAI_API_VERSION_VAR,
                Some(DEFAULT_OPENAI_API_VERSION),
            )?,
        };

        let client = self.clients.llm_client(credentials)?;
        let text = client.complete(deployment, &prompt).await?;

        tracing::info!(chars = text.chars().count(), "Text processing completed");

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TextProcessingError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Completion(#[from] LlmClientError),
}
