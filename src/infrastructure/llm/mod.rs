mod azure_openai_client;
mod mock_llm_client;

pub use azure_openai_client::AzureOpenAiClient;
pub use mock_llm_client::MockLlmClient;
