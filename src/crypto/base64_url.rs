//! URL-safe Base64 used for every ciphertext exchanged with the platform.
//!
//! Encoding is standard Base64 with `+` → `-`, `/` → `_` and padding dropped.
//! Decoding reverses the substitution and re-pads to a multiple of four before
//! running the standard decoder, so input produced by other SDKs of the same
//! protocol family (padded or not) is accepted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CryptoError;

/// Encode raw bytes as unpadded URL-safe Base64.
pub fn encode(data: &[u8]) -> String {
    STANDARD
        .encode(data)
        .chars()
        .filter_map(|c| match c {
            '+' => Some('-'),
            '/' => Some('_'),
            '=' => None,
            c => Some(c),
        })
        .collect()
}

/// Decode URL-safe Base64, tolerating missing padding.
pub fn decode(data: &str) -> Result<Vec<u8>, CryptoError> {
    let mut standard: String = data
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    let remainder = standard.len() % 4;
    if remainder != 0 {
        standard.extend(std::iter::repeat('=').take(4 - remainder));
    }

    Ok(STANDARD.decode(standard)?)
}
