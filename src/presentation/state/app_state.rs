use std::sync::Arc;

use crate::application::ports::{ClientFactory, ConfigSource};
use crate::application::services::{
    DocumentAnalysisService, TextProcessingService, UploadUrlService,
};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub upload_url_service: Arc<UploadUrlService>,
    pub document_analysis_service: Arc<DocumentAnalysisService>,
    pub text_processing_service: Arc<TextProcessingService>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        config: Arc<dyn ConfigSource>,
        clients: Arc<dyn ClientFactory>,
        settings: Settings,
    ) -> Self {
        Self {
            upload_url_service: Arc::new(UploadUrlService::new(
                Arc::clone(&config),
                Arc::clone(&clients),
            )),
            document_analysis_service: Arc::new(DocumentAnalysisService::new(
                Arc::clone(&config),
                Arc::clone(&clients),
            )),
            text_processing_service: Arc::new(TextProcessingService::new(config, clients)),
            settings,
        }
    }
}
