use serde_json::Value;

use super::ValidationError;

pub const MAX_UPLOAD_COUNT: u32 = 20;

/// Number of upload URLs to mint, always within `1..=MAX_UPLOAD_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadCount(u32);

impl UploadCount {
    pub fn new(count: i64) -> Result<Self, ValidationError> {
        if count <= 0 || count > i64::from(MAX_UPLOAD_COUNT) {
            return Err(ValidationError::InvalidCount);
        }
        Ok(Self(count as u32))
    }

    /// Reads `count` from a request payload. Integral floats and numeric strings
    /// are coerced; an absent field counts as zero and is rejected.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let raw = match payload.get("count") {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => i,
                None => n
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .ok_or(ValidationError::InvalidCount)?,
            },
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidCount)?,
            Some(_) => return Err(ValidationError::InvalidCount),
        };
        Self::new(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}
