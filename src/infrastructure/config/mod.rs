mod env_config_source;
mod in_memory_config_source;

pub use env_config_source::EnvConfigSource;
pub use in_memory_config_source::InMemoryConfigSource;
