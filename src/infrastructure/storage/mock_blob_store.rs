use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{BlobName, UploadGrant};

/// How [`MockBlobStore::create_container`] responds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerBehavior {
    Created,
    AlreadyExists,
    Fails,
}

pub struct MockBlobStore {
    behavior: ContainerBehavior,
    create_calls: AtomicUsize,
    issued: Mutex<Vec<String>>,
}

impl MockBlobStore {
    pub fn new(behavior: ContainerBehavior) -> Self {
        Self {
            behavior,
            create_calls: AtomicUsize::new(0),
            issued: Mutex::new(Vec::new()),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn create_container(&self) -> Result<(), BlobStoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            ContainerBehavior::Created => Ok(()),
            ContainerBehavior::AlreadyExists => Err(BlobStoreError::ContainerAlreadyExists),
            ContainerBehavior::Fails => Err(BlobStoreError::RequestFailed(
                "create container returned 403 Forbidden".to_string(),
            )),
        }
    }

    fn upload_url(&self, blob: &BlobName, grant: &UploadGrant) -> Result<String, BlobStoreError> {
        let url = format!(
            "https://mock.blob.core.windows.net/uploads/{}?se={}&sp={}&sig=mock",
            blob,
            grant.expires_at.timestamp(),
            grant.permissions.as_sas_string()
        );
        if let Ok(mut issued) = self.issued.lock() {
            issued.push(url.clone());
        }
        Ok(url)
    }
}
