mod azure_client_factory;
mod mock_client_factory;

pub use azure_client_factory::{AzureClientFactory, COMPLETION_TIMEOUT, REQUEST_TIMEOUT};
pub use mock_client_factory::MockClientFactory;
