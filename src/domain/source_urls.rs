use serde_json::Value;

use super::ValidationError;

/// Non-empty, ordered list of document URLs to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls(Vec<String>);

impl SourceUrls {
    pub fn new(urls: Vec<String>) -> Result<Self, ValidationError> {
        if urls.is_empty() {
            return Err(ValidationError::MissingUrls);
        }
        Ok(Self(urls))
    }

    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let Some(Value::Array(items)) = payload.get("urls") else {
            return Err(ValidationError::MissingUrls);
        };

        let urls = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(ValidationError::MissingUrls)?;

        Self::new(urls)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
