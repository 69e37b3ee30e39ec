/// Read access to deployment configuration, consulted on every request.
pub trait ConfigSource: Send + Sync {
    fn lookup(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
}

/// Resolves `name`, falling back to `default`, or fails naming the variable.
pub fn require(
    source: &dyn ConfigSource,
    name: &str,
    default: Option<&str>,
) -> Result<String, ConfigError> {
    source
        .lookup(name)
        .or_else(|| default.map(str::to_string))
        .ok_or_else(|| ConfigError::MissingVariable(name.to_string()))
}
