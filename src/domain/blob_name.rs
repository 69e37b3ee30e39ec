use std::fmt;

use uuid::Uuid;

pub const UPLOAD_EXTENSION: &str = ".jpg";

/// Opaque object name: 128 random bits as 32 lowercase hex digits plus `.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobName(String);

impl BlobName {
    pub fn random() -> Self {
        Self(format!("{}{}", Uuid::new_v4().simple(), UPLOAD_EXTENSION))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
