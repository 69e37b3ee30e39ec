use async_trait::async_trait;

use crate::domain::{BlobName, UploadGrant};

/// Blob storage scoped to a single container.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Creates the container. Returns [`BlobStoreError::ContainerAlreadyExists`]
    /// when it is already present.
    async fn create_container(&self) -> Result<(), BlobStoreError>;

    /// Mints a fully-qualified URL for `blob` carrying a signed access token.
    fn upload_url(&self, blob: &BlobName, grant: &UploadGrant) -> Result<String, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("container already exists")]
    ContainerAlreadyExists,
    #[error("invalid storage credentials: {0}")]
    InvalidCredentials(String),
    #[error("storage request failed: {0}")]
    RequestFailed(String),
    #[error("invalid storage response: {0}")]
    InvalidResponse(String),
}
