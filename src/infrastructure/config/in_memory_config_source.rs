use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::ConfigSource;

#[derive(Debug, Default)]
pub struct InMemoryConfigSource {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, name: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(name);
        }
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.read().ok()?.get(name).cloned()
    }
}
