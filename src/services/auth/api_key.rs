//! `Authorization: ApiKey <key>` header parsing - core logic.
//!
//! Core-only like the other auth services: it knows nothing about axum
//! middleware, extensions or key storage. Whether the key is *valid* is the
//! caller's concern; this module only answers "was a key presented, and in
//! the expected shape?".

use std::fmt;

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// Scheme token expected in front of the key (case-sensitive).
pub const API_KEY_SCHEME: &str = "ApiKey";

const FINGERPRINT_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Credential presented by the client.
///
/// Opaque: nothing beyond non-emptiness is checked. `Debug` is redacted so
/// the key never ends up in logs via `?key`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short, non-reversible identifier for log correlation.
    ///
    /// base64url(SHA-256(key)) truncated to 16 chars.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut encoded = URL_SAFE_NO_PAD.encode(digest);
        encoded.truncate(FINGERPRINT_LEN);
        encoded
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Extract the API key from the `Authorization` header.
///
/// Only the first `Authorization` value is considered. Callers that must
/// reject multi-valued headers have to do so before calling this.
pub fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;

    // HeaderValue::to_str is visible-ASCII only; keys are opaque, so accept any UTF-8
    let raw = std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, key) = raw.split_once(' ').ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(ApiKey(key.to_owned()))
}
