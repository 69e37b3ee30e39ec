use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::application::ports::BlobStoreError;
use crate::domain::UploadGrant;

type HmacSha256 = Hmac<Sha256>;

pub const STORAGE_SERVICE_VERSION: &str = "2022-11-02";
const SAS_EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Decoded storage account key.
#[derive(Clone)]
pub struct AccountKey(Vec<u8>);

impl AccountKey {
    pub fn from_base64(encoded: &str) -> Result<Self, BlobStoreError> {
        general_purpose::STANDARD
            .decode(encoded.trim())
            .map(Self)
            .map_err(|e| BlobStoreError::InvalidCredentials(format!("account key: {e}")))
    }

    /// Base64 HMAC-SHA256 of `message`.
    pub fn sign(&self, message: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.0).expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccountKey([REDACTED])")
    }
}

/// Service SAS scoped to a single blob.
pub struct BlobSas<'a> {
    pub account: &'a str,
    pub container: &'a str,
    pub blob: &'a str,
    pub grant: &'a UploadGrant,
}

impl BlobSas<'_> {
    pub fn string_to_sign(&self) -> String {
        let permissions = self.grant.permissions.as_sas_string();
        let expiry = self.expiry();
        let resource = format!("/blob/{}/{}/{}", self.account, self.container, self.blob);

        // signed start, identifier, IP, protocol, snapshot, encryption scope and
        // the rscc/rscd/rsce/rscl overrides are unset.
        [
            permissions.as_str(),
            "",
            expiry.as_str(),
            resource.as_str(),
            "",
            "",
            "",
            STORAGE_SERVICE_VERSION,
            "b",
            "",
            "",
            "",
            "",
            "",
            "",
            self.grant.content_type,
        ]
        .join("\n")
    }

    /// Query string carrying the token, without the leading `?`.
    pub fn to_query(&self, key: &AccountKey) -> String {
        let signature = key.sign(&self.string_to_sign());
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("sv", STORAGE_SERVICE_VERSION)
            .append_pair("se", &self.expiry())
            .append_pair("sr", "b")
            .append_pair("sp", &self.grant.permissions.as_sas_string())
            .append_pair("rsct", self.grant.content_type)
            .append_pair("sig", &signature)
            .finish()
    }

    fn expiry(&self) -> String {
        self.grant.expires_at.format(SAS_EXPIRY_FORMAT).to_string()
    }
}

/// Shared Key string-to-sign for a body-less request.
/// `ms_headers` must be lowercase `x-ms-*` pairs; they are sorted here.
pub fn shared_key_string_to_sign(
    method: &str,
    ms_headers: &[(&str, &str)],
    canonical_resource: &str,
) -> String {
    let mut headers = ms_headers.to_vec();
    headers.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::from(method);
    out.push('\n');
    // Content-Encoding through Range are all empty; Content-Length is empty when zero.
    for _ in 0..11 {
        out.push('\n');
    }
    for (name, value) in headers {
        out.push_str(name);
        out.push(':');
        out.push_str(value);
        out.push('\n');
    }
    out.push_str(canonical_resource);
    out
}

/// `/{account}{path}` followed by lowercase, sorted `name:value` query lines.
pub fn canonical_resource(account: &str, url: &url::Url) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.to_lowercase(), v.into_owned()))
        .collect();
    params.sort();

    let mut out = format!("/{}{}", account, url.path());
    for (name, value) in params {
        out.push('\n');
        out.push_str(&name);
        out.push(':');
        out.push_str(&value);
    }
    out
}
