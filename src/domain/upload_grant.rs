use chrono::{DateTime, Duration, Utc};

pub const UPLOAD_TTL_MINUTES: i64 = 10;
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobPermissions {
    pub read: bool,
    pub write: bool,
    pub create: bool,
}

impl BlobPermissions {
    pub const READ_WRITE_CREATE: Self = Self {
        read: true,
        write: true,
        create: true,
    };

    /// Permission letters in the order blob storage requires (`r`, `c`, `w`).
    pub fn as_sas_string(&self) -> String {
        let mut out = String::with_capacity(3);
        if self.read {
            out.push('r');
        }
        if self.create {
            out.push('c');
        }
        if self.write {
            out.push('w');
        }
        out
    }
}

/// Access granted to a client for a single uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGrant {
    pub permissions: BlobPermissions,
    pub expires_at: DateTime<Utc>,
    pub content_type: &'static str,
}

impl UploadGrant {
    pub fn image_upload(now: DateTime<Utc>) -> Self {
        Self {
            permissions: BlobPermissions::READ_WRITE_CREATE,
            expires_at: now + Duration::minutes(UPLOAD_TTL_MINUTES),
            content_type: UPLOAD_CONTENT_TYPE,
        }
    }
}
