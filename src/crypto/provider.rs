//! Crypto capability consumed by the envelope and notification codec.

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::crypto::{cipher, keys, signer};
use crate::error::CryptoError;

/// Encrypt/decrypt/sign primitives used by the request envelope.
///
/// This is the seam for HSM or KMS backed implementations. Substitutes must
/// keep the segmented cipher's wire contract (234-byte plaintext segments,
/// 256-byte blocks, unpadded URL-safe Base64) since the platform and sibling
/// SDKs interoperate on it.
pub trait CryptoProvider: Send + Sync {
    /// Encrypt a plaintext string with the merchant private key.
    fn encrypt_with_private_key(&self, plaintext: &str) -> Result<String, CryptoError>;

    /// Decrypt platform ciphertext with the platform public key.
    fn decrypt_with_public_key(&self, ciphertext: &str) -> Result<String, CryptoError>;

    /// RSA-SHA256 signature over `data`, Base64 or lowercase hex encoded.
    fn sign(&self, data: &str, base64_encode: bool) -> Result<String, CryptoError>;

    /// Whether a dedicated transaction signing key is available.
    ///
    /// Endpoints that accept `need_transaction_sign` refuse to run when this
    /// is `false`.
    fn supports_transaction_signing(&self) -> bool {
        true
    }
}

/// Default [`CryptoProvider`] backed by in-memory RSA keys.
#[derive(Clone)]
pub struct RsaCryptoProvider {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    signing_key: Option<RsaPrivateKey>,
}

impl RsaCryptoProvider {
    /// Build from the merchant private key and the platform public key.
    ///
    /// Keys may be PEM text or bare Base64 bodies.
    pub fn new(private_key: &str, public_key: &str) -> Result<Self, CryptoError> {
        Ok(Self {
            private_key: keys::parse_private_key(private_key)?,
            public_key: keys::parse_public_key(public_key)?,
            signing_key: None,
        })
    }

    /// Attach a dedicated transaction signing key.
    pub fn with_signing_key(mut self, signing_key: &str) -> Result<Self, CryptoError> {
        self.signing_key = Some(keys::parse_private_key(signing_key)?);
        Ok(self)
    }

    pub fn has_signing_key(&self) -> bool {
        self.signing_key.is_some()
    }
}

impl std::fmt::Debug for RsaCryptoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaCryptoProvider")
            .field("has_signing_key", &self.signing_key.is_some())
            .finish_non_exhaustive()
    }
}

impl CryptoProvider for RsaCryptoProvider {
    fn encrypt_with_private_key(&self, plaintext: &str) -> Result<String, CryptoError> {
        cipher::encrypt_with_private_key(plaintext.as_bytes(), &self.private_key)
    }

    fn decrypt_with_public_key(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let plaintext = cipher::decrypt_with_public_key(ciphertext, &self.public_key)?;
        Ok(String::from_utf8(plaintext)?)
    }

    fn sign(&self, data: &str, base64_encode: bool) -> Result<String, CryptoError> {
        let key = self.signing_key.as_ref().unwrap_or(&self.private_key);
        signer::sign(data, key, base64_encode)
    }

    fn supports_transaction_signing(&self) -> bool {
        self.has_signing_key()
    }
}
