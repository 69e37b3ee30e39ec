use std::sync::Arc;

use crate::application::ports::{
    ClientFactory, ConfigError, ConfigSource, DocumentAnalyzerError,
    DocumentIntelligenceCredentials, require,
};
use crate::domain::{AnalysisResult, SourceUrls};

pub const DI_ENDPOINT_VAR: &str = "AZURE_DI_ENDPOINT";
pub const DI_KEY_VAR: &str = "AZURE_DI_KEY";

pub struct DocumentAnalysisService {
    config: Arc<dyn ConfigSource>,
    clients: Arc<dyn ClientFactory>,
}

impl DocumentAnalysisService {
    pub fn new(config: Arc<dyn ConfigSource>, clients: Arc<dyn ClientFactory>) -> Self {
        Self { config, clients }
    }

    /// Analyzes every URL in order and flattens their lines into one list.
    /// The first failure aborts the request and discards lines already read.
    #[tracing::instrument(skip(self, urls), fields(url_count = urls.len()))]
    pub async fn analyze(&self, urls: &SourceUrls) -> Result<AnalysisResult, AnalysisError> {
        let source = self.config.as_ref();
        let credentials = DocumentIntelligenceCredentials {
            endpoint: require(source, DI_ENDPOINT_VAR, None)?,
            api_key: require(source, DI_KEY_VAR, None)?,
        };
        let analyzer = self.clients.document_analyzer(credentials)?;

        let mut text_blocks = Vec::new();
        for (index, url) in urls.iter().enumerate() {
            match analyzer.analyze(url).await {
                Ok(document) => text_blocks.extend(document.into_lines()),
                Err(e) => {
                    tracing::error!(url_index = index, error = %e, "Document analysis failed");
                    return Err(AnalysisError::Analyzer(e));
                }
            }
        }

        tracing::info!(lines = text_blocks.len(), "Document analysis completed");

        Ok(AnalysisResult::from_text_blocks(text_blocks))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Analyzer(#[from] DocumentAnalyzerError),
}
