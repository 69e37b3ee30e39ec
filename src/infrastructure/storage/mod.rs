mod azure_blob_store;
mod mock_blob_store;
mod signing;

pub use azure_blob_store::AzureBlobStore;
pub use mock_blob_store::{ContainerBehavior, MockBlobStore};
pub use signing::{
    AccountKey, BlobSas, STORAGE_SERVICE_VERSION, canonical_resource, shared_key_string_to_sign,
};
