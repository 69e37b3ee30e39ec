use crate::presentation::config::{Environment, LoggingSettings};

/// Subscriber options derived from [`LoggingSettings`].
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.json_format,
            level: logging.level.clone(),
        }
    }
}
