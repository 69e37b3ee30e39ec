pub mod clients;
pub mod config;
pub mod llm;
pub mod observability;
pub mod storage;
pub mod text_processing;
