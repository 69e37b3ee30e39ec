use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Process-wide settings, read once at startup. Service credentials are not
/// part of this; they are resolved per request through a `ConfigSource`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub poll_timeout_secs: u64,
}

impl AnalysisSettings {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    /// When set, `/api` routes require this key as `code` or `x-functions-key`.
    pub function_key: Option<String>,
}

impl Settings {
    /// Layers defaults, `config/base.yaml`, `config/{environment}.yaml` and
    /// `APP_`-prefixed variables (`APP_SERVER__PORT=8080`), later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", false)?
            .set_default("analysis.poll_timeout_secs", 300)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{}", environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
