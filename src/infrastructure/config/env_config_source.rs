use crate::application::ports::ConfigSource;

/// Reads the process environment on every lookup, so rotated values apply
/// to the next request without a restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
