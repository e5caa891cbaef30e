//! RSA-SHA256 signatures over canonical sign strings.
//!
//! Unlike the segmented cipher this signs a SHA-256 digest, so input length is
//! irrelevant and no segmentation applies.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Sign `data` with RSA-SHA256 (PKCS#1 v1.5).
///
/// Returns standard Base64 when `base64_encode` is set, lowercase hex otherwise.
pub fn sign(data: &str, key: &RsaPrivateKey, base64_encode: bool) -> Result<String, CryptoError> {
    let digest = Sha256::digest(data.as_bytes());
    let signature = key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|e| CryptoError::Sign(e.to_string()))?;

    Ok(if base64_encode {
        STANDARD.encode(signature)
    } else {
        hex::encode(signature)
    })
}
