mod blob_store;
mod client_factory;
mod config_source;
mod document_analyzer;
mod llm_client;

pub use blob_store::{BlobStore, BlobStoreError};
pub use client_factory::{
    ClientFactory, DocumentIntelligenceCredentials, OpenAiCredentials, StorageCredentials,
};
pub use config_source::{ConfigError, ConfigSource, require};
pub use document_analyzer::{DocumentAnalyzer, DocumentAnalyzerError};
pub use llm_client::{LlmClient, LlmClientError};
