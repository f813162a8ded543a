//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

/// HMAC-SHA256 keyed with the process-wide signing secret
pub type HmacSha256 = Hmac<Sha256>;

/// Length of a generated signing secret in bytes
pub const SECRET_LEN: usize = 32;

/// Fresh signing secret for development runs and tests
pub fn random_secret() -> [u8; SECRET_LEN] {
    let mut secret = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Encode bytes as standard base64 (configuration values)
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64 (configuration values)
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

/// Encode bytes as URL-safe base64 without padding (token segments)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe base64 without padding (token segments)
pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Build a keyed MAC. HMAC accepts keys of any length, so this only
/// fails for an empty key.
pub fn hmac_key(secret: &[u8]) -> Option<HmacSha256> {
    if secret.is_empty() {
        return None;
    }
    <HmacSha256 as Mac>::new_from_slice(secret).ok()
}

/// Compute HMAC-SHA256 of `data` with a prepared key
pub fn hmac_sign(key: &HmacSha256, data: &[u8]) -> [u8; 32] {
    let mut mac = key.clone();
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Verify an HMAC-SHA256 tag in constant time
pub fn hmac_verify(key: &HmacSha256, data: &[u8], tag: &[u8]) -> bool {
    let mut mac = key.clone();
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}
