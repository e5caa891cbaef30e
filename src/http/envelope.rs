//! Request/response envelope: the error boundary of every endpoint call.
//!
//! Per call:
//! 1. merge the caller's parameters with `time` (epoch ms) and `charset`,
//!    serialize to JSON (non-ASCII kept literal);
//! 2. encrypt the JSON with the merchant private key;
//! 3. send `{app_id, data}` and nothing else;
//! 4. a non-200 status or non-JSON body is a local failure;
//! 5. a string `data` field is decrypted and its `code`/`msg`/`data` lifted;
//! 6. otherwise the outer `code`/`msg`/`data` are the result.
//!
//! Every path ends in an [`ApiResponse`]; nothing below this layer surfaces
//! to the caller as an error.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::CryptoError;
use crate::http::transport::{HttpMethod, HttpRequest, HttpResponse};
use crate::shared::{
    ApiResponse, Params, CODE_DECRYPT_FAILED, CODE_INVALID_PAYLOAD, CODE_INVALID_RESPONSE,
    CODE_REQUEST_FAILED, CODE_SUCCESS,
};

/// Characters of ciphertext included in debug logs.
const LOG_CIPHER_PREFIX: usize = 100;

/// Executes envelope calls against one configured endpoint family.
#[derive(Clone)]
pub struct Envelope {
    config: Arc<ClientConfig>,
}

impl Envelope {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn get(&self, path: &str, params: Params) -> ApiResponse {
        self.execute(HttpMethod::Get, path, params)
    }

    pub fn post(&self, path: &str, params: Params) -> ApiResponse {
        self.execute(HttpMethod::Post, path, params)
    }

    /// Run one encrypted round trip.
    pub fn execute(&self, method: HttpMethod, path: &str, params: Params) -> ApiResponse {
        let config = self.config();
        let logger = config.logger();
        let url = config.url(path);

        let raw = match self.request_args(params) {
            Ok(raw) => raw,
            Err(e) => return self.request_failed(&url, &e),
        };
        if config.debug() {
            logger.debug(
                "[Request Args]",
                &json!({ "method": method.as_str(), "url": url, "args": raw }),
            );
        }

        let data = match config.crypto().encrypt_with_private_key(&raw) {
            Ok(data) => data,
            Err(e) => {
                return self.request_failed(&url, &format!("Failed to encrypt request data: {}", e))
            }
        };
        if config.debug() {
            let prefix: String = data.chars().take(LOG_CIPHER_PREFIX).collect();
            logger.debug("[Encrypted Data]", &json!({ "data": format!("{}...", prefix) }));
        }

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: vec![
                (
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ),
                ("Accept".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), config.user_agent().to_string()),
            ],
            form: vec![
                ("app_id".to_string(), config.app_id().to_string()),
                ("data".to_string(), data),
            ],
            timeout: config.timeout(),
        };

        let response = match config.transport().send(&request) {
            Ok(response) => response,
            Err(e) => return self.request_failed(&url, &e),
        };
        if config.debug() {
            logger.debug(
                "[Response]",
                &json!({ "url": url, "status": response.status, "body": response.body }),
            );
        }

        self.open_response(response)
    }

    /// JSON request arguments with `time` and `charset` injected.
    fn request_args(&self, mut params: Params) -> Result<String, serde_json::Error> {
        params.insert("time".to_string(), json!(Utc::now().timestamp_millis()));
        params.insert(
            "charset".to_string(),
            Value::String(self.config.charset().to_string()),
        );
        serde_json::to_string(&Value::Object(params))
    }

    fn request_failed(&self, url: &str, error: &dyn std::fmt::Display) -> ApiResponse {
        let msg = format!("Request failed: {}", error);
        self.config
            .logger()
            .error("[Request Error]", &json!({ "url": url, "error": msg }));
        ApiResponse::failure(CODE_REQUEST_FAILED, msg)
    }

    /// Interpret a raw response: status, outer JSON, then decrypt or pass through.
    pub(crate) fn open_response(&self, response: HttpResponse) -> ApiResponse {
        if response.status != 200 {
            let msg = format!(
                "http status {}, {}",
                response.status,
                response.reason.as_deref().unwrap_or_default()
            );
            self.config
                .logger()
                .error("[HTTP Error]", &json!({ "status": response.status }));
            return ApiResponse::new(CODE_REQUEST_FAILED, msg, Value::String(response.body));
        }

        let outer: Value = match serde_json::from_str(&response.body) {
            Ok(outer) => outer,
            Err(_) => {
                return ApiResponse::failure(
                    CODE_INVALID_RESPONSE,
                    format!("Invalid JSON response: {}", response.body),
                )
            }
        };

        match outer.get("data") {
            Some(Value::String(ciphertext)) => self.decrypt_payload(ciphertext),
            _ => ApiResponse::from_payload(&outer, CODE_REQUEST_FAILED, "Unknown error"),
        }
    }

    fn decrypt_payload(&self, ciphertext: &str) -> ApiResponse {
        let config = self.config();

        let decrypted = match config.crypto().decrypt_with_public_key(ciphertext) {
            Ok(decrypted) => decrypted,
            // The blocks decrypted; only the payload they carry is unusable.
            Err(CryptoError::Utf8(_)) => {
                return ApiResponse::failure(
                    CODE_INVALID_PAYLOAD,
                    "Failed to parse decrypted response",
                )
            }
            Err(e) => {
                let msg = format!("Failed to decrypt response: {}", e);
                config
                    .logger()
                    .error("[Decrypt Error]", &json!({ "error": msg }));
                return ApiResponse::failure(CODE_DECRYPT_FAILED, msg);
            }
        };
        if config.debug() {
            config
                .logger()
                .debug("[Decrypted]", &json!({ "payload": decrypted }));
        }

        match serde_json::from_str::<Value>(&decrypted) {
            Ok(payload) => ApiResponse::from_payload(&payload, CODE_SUCCESS, ""),
            Err(_) => ApiResponse::failure(
                CODE_INVALID_PAYLOAD,
                "Failed to parse decrypted response",
            ),
        }
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("config", &self.config)
            .finish()
    }
}
