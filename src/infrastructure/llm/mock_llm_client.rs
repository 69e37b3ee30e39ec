use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::Prompt;

/// Echo-style client that records every call.
pub struct MockLlmClient {
    reply: Result<String, String>,
    calls: Mutex<Vec<(String, Prompt)>>,
}

impl MockLlmClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Prompt)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, deployment: &str, prompt: &Prompt) -> Result<String, LlmClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((deployment.to_string(), prompt.clone()));
        }
        self.reply
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}
