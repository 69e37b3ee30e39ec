use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{
    BlobStoreError, ClientFactory, ConfigError, ConfigSource, StorageCredentials, require,
};
use crate::domain::{BlobName, UploadCount, UploadGrant};

pub const STORAGE_ACCOUNT_VAR: &str = "AZURE_STORAGE_ACCOUNT";
pub const STORAGE_KEY_VAR: &str = "AZURE_STORAGE_KEY";
pub const STORAGE_CONTAINER_VAR: &str = "AZURE_STORAGE_CONTAINER";
pub const STORAGE_ENDPOINT_VAR: &str = "AZURE_STORAGE_ENDPOINT";

/// Mints short-lived upload URLs for client-side image uploads.
pub struct UploadUrlService {
    config: Arc<dyn ConfigSource>,
    clients: Arc<dyn ClientFactory>,
}

impl UploadUrlService {
    pub fn new(config: Arc<dyn ConfigSource>, clients: Arc<dyn ClientFactory>) -> Self {
        Self { config, clients }
    }

    #[tracing::instrument(skip(self, count), fields(count = count.get()))]
    pub async fn issue(&self, count: UploadCount) -> Result<Vec<String>, UploadUrlError> {
        let credentials = self.storage_credentials()?;
        let container = credentials.container.clone();
        let store = self.clients.blob_store(credentials)?;

        match store.create_container().await {
            Ok(()) => tracing::info!(container = %container, "Created storage container"),
            Err(BlobStoreError::ContainerAlreadyExists) => {
                tracing::debug!(container = %container, "Storage container already exists");
            }
            Err(e) => return Err(UploadUrlError::Storage(e)),
        }

        let grant = UploadGrant::image_upload(Utc::now());
        let urls = (0..count.get())
            .map(|_| store.upload_url(&BlobName::random(), &grant))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            issued = urls.len(),
            expires_at = %grant.expires_at,
            "Issued upload URLs"
        );

        Ok(urls)
    }

    fn storage_credentials(&self) -> Result<StorageCredentials, ConfigError> {
        let source = self.config.as_ref();
        Ok(StorageCredentials {
            account: require(source, STORAGE_ACCOUNT_VAR, None)?,
            access_key: require(source, STORAGE_KEY_VAR, None)?,
            container: require(source, STORAGE_CONTAINER_VAR, None)?,
            endpoint: source.lookup(STORAGE_ENDPOINT_VAR),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadUrlError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] BlobStoreError),
}
