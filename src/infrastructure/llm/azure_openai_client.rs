use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::application::ports::{LlmClient, LlmClientError, OpenAiCredentials};
use crate::domain::Prompt;

pub struct AzureOpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AzureOpenAiClient {
    pub fn new(client: Client, credentials: OpenAiCredentials) -> Self {
        Self {
            client,
            endpoint: credentials.endpoint.trim_end_matches('/').to_string(),
            api_key: credentials.api_key,
            api_version: credentials.api_version,
        }
    }

    pub fn completions_url(&self, deployment: &str) -> Result<Url, LlmClientError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("invalid endpoint: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| {
                LlmClientError::ApiRequestFailed("endpoint cannot be a base url".to_string())
            })?
            .pop_if_empty()
            .extend(["openai", "deployments", deployment, "chat", "completions"]);
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);

        Ok(url)
    }
}

#[async_trait]
impl LlmClient for AzureOpenAiClient {
    #[tracing::instrument(skip(self, prompt))]
    async fn complete(&self, deployment: &str, prompt: &Prompt) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        };

        let response = self
            .client
            .post(self.completions_url(deployment)?)
            .header("api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
