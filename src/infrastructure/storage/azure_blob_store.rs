use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use url::Url;

use super::signing::{
    AccountKey, BlobSas, STORAGE_SERVICE_VERSION, canonical_resource, shared_key_string_to_sign,
};
use crate::application::ports::{BlobStore, BlobStoreError, StorageCredentials};
use crate::domain::{BlobName, UploadGrant};

const ERROR_CODE_HEADER: &str = "x-ms-error-code";
const CONTAINER_ALREADY_EXISTS: &str = "ContainerAlreadyExists";

pub struct AzureBlobStore {
    client: Client,
    account: String,
    key: AccountKey,
    container: String,
    base_url: String,
}

impl AzureBlobStore {
    pub fn new(client: Client, credentials: StorageCredentials) -> Result<Self, BlobStoreError> {
        let key = AccountKey::from_base64(&credentials.access_key)?;
        let base_url = credentials
            .endpoint
            .unwrap_or_else(|| format!("https://{}.blob.core.windows.net", credentials.account))
            .trim_end_matches('/')
            .to_string();

        Url::parse(&base_url)
            .map_err(|e| BlobStoreError::InvalidCredentials(format!("endpoint: {e}")))?;

        Ok(Self {
            client,
            account: credentials.account,
            key,
            container: credentials.container,
            base_url,
        })
    }

    pub fn container_url(&self) -> String {
        format!("{}/{}", self.base_url, self.container)
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    #[tracing::instrument(skip(self), fields(container = %self.container))]
    async fn create_container(&self) -> Result<(), BlobStoreError> {
        let url = Url::parse(&format!("{}?restype=container", self.container_url()))
            .map_err(|e| BlobStoreError::RequestFailed(format!("container url: {e}")))?;

        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let string_to_sign = shared_key_string_to_sign(
            "PUT",
            &[
                ("x-ms-date", date.as_str()),
                ("x-ms-version", STORAGE_SERVICE_VERSION),
            ],
            &canonical_resource(&self.account, &url),
        );
        let authorization = format!("SharedKey {}:{}", self.account, self.key.sign(&string_to_sign));

        let response = self
            .client
            .put(url)
            .header("x-ms-date", &date)
            .header("x-ms-version", STORAGE_SERVICE_VERSION)
            .header("Authorization", authorization)
            .header("Content-Length", "0")
            .send()
            .await
            .map_err(|e| BlobStoreError::RequestFailed(format!("create container: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_code = response
            .headers()
            .get(ERROR_CODE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if status == StatusCode::CONFLICT && error_code.as_deref() == Some(CONTAINER_ALREADY_EXISTS)
        {
            return Err(BlobStoreError::ContainerAlreadyExists);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BlobStoreError::RequestFailed(format!(
            "create container returned {status} ({}): {body}",
            error_code.as_deref().unwrap_or("no error code")
        )))
    }

    fn upload_url(&self, blob: &BlobName, grant: &UploadGrant) -> Result<String, BlobStoreError> {
        let sas = BlobSas {
            account: &self.account,
            container: &self.container,
            blob: blob.as_str(),
            grant,
        };

        Ok(format!(
            "{}/{}?{}",
            self.container_url(),
            blob,
            sas.to_query(&self.key)
        ))
    }
}
