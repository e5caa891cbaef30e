//! Unified SDK error types.
//!
//! These errors only surface for local precondition failures (bad config,
//! missing fields, signing problems). Once a request has been handed to the
//! envelope, every outcome is reported as an [`ApiResponse`](crate::shared::ApiResponse).

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Key handling, cipher and signature errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to encrypt with private key: {0}")]
    Encrypt(String),

    #[error("Invalid cipher block at offset {offset}: {reason}")]
    InvalidBlock { offset: usize, reason: String },

    #[error("Failed to sign data: {0}")]
    Sign(String),

    #[error("Decrypted data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("No signing key configured")]
    SigningKeyMissing,
}
