//! Webhook notification codec.
//!
//! The platform delivers deposit/withdrawal notifications and withdrawal
//! verification requests as ciphertext; the merchant answers verification
//! requests with ciphertext. No HTTP call is made here, the caller owns the
//! webhook transport.
//!
//! Every failure collapses to `None` and is reported only through the logger.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ClientConfig;

/// Notification sub-client shared by the custody and MPC clients.
pub struct Notifications<'a> {
    pub(crate) config: &'a ClientConfig,
    pub(crate) label: &'static str,
}

impl<'a> Notifications<'a> {
    /// Decrypt and parse a deposit/withdrawal notification.
    pub fn notify_request(&self, cipher: &str) -> Option<Value> {
        self.open("notify request", cipher)
    }

    /// Decrypt and parse a withdrawal verification request.
    pub fn verify_request(&self, cipher: &str) -> Option<Value> {
        self.open("verify request", cipher)
    }

    /// Encrypt the answer to a verification request.
    ///
    /// Returns `None` for an empty payload (null, `{}` or `[]`) or when
    /// serialization or encryption fails.
    pub fn verify_response<T: Serialize + ?Sized>(&self, payload: &T) -> Option<String> {
        let value = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                self.log_error("verify response serialization failed", &e.to_string());
                return None;
            }
        };
        if is_empty(&value) {
            self.log_error("verify response payload cannot be empty", "");
            return None;
        }

        let raw = match serde_json::to_string(&value) {
            Ok(raw) => raw,
            Err(e) => {
                self.log_error("verify response serialization failed", &e.to_string());
                return None;
            }
        };

        match self.config.crypto().encrypt_with_private_key(&raw) {
            Ok(cipher) if !cipher.is_empty() => Some(cipher),
            Ok(_) => {
                self.log_error("verify response encrypt returned empty", "");
                None
            }
            Err(e) => {
                self.log_error("failed to encrypt verify response", &e.to_string());
                None
            }
        }
    }

    fn open(&self, kind: &str, cipher: &str) -> Option<Value> {
        let logger = self.config.logger();

        if cipher.trim().is_empty() {
            if self.config.debug() {
                logger.debug(
                    &format!("{} {} cipher cannot be empty", self.label, kind),
                    &Value::Null,
                );
            }
            return None;
        }

        let raw = match self.config.crypto().decrypt_with_public_key(cipher) {
            Ok(raw) => raw,
            Err(e) => {
                self.log_error(&format!("failed to decrypt {}", kind), &e.to_string());
                return None;
            }
        };
        if self.config.debug() {
            logger.debug(
                &format!("{} {} decrypted", self.label, kind),
                &json!({ "raw": raw }),
            );
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) if !is_empty(&value) => Some(value),
            Ok(_) => {
                self.log_error(&format!("{} decoded to an empty value", kind), "");
                None
            }
            Err(e) => {
                self.log_error(&format!("{} JSON decode failed", kind), &e.to_string());
                None
            }
        }
    }

    fn log_error(&self, message: &str, error: &str) {
        let context = if error.is_empty() {
            Value::Null
        } else {
            json!({ "error": error })
        };
        self.config
            .logger()
            .error(&format!("{} {}", self.label, message), &context);
    }
}

/// Null, `false`, empty string, `{}` and `[]` carry no notification.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!(false)));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!({"side": "deposit"})));
        assert!(!is_empty(&json!(0)));
    }
}
