//! Cryptographic primitives for the request envelope.
//!
//! - [`base64_url`]: URL-safe Base64 boundary encoding
//! - [`keys`]: PEM normalization and RSA key parsing
//! - [`cipher`]: segmented RSA encrypt/decrypt
//! - [`signer`]: RSA-SHA256 signatures
//! - [`provider`]: the pluggable [`CryptoProvider`] capability

pub mod base64_url;
pub mod cipher;
pub mod keys;
pub mod provider;
pub mod signer;

pub use cipher::{MAX_DECRYPT_BLOCK, MAX_ENCRYPT_BLOCK};
pub use keys::{format_private_key, format_public_key};
pub use provider::{CryptoProvider, RsaCryptoProvider};
