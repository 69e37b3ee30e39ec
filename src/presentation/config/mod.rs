mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};
pub use settings::{AnalysisSettings, AuthSettings, LoggingSettings, ServerSettings, Settings};
