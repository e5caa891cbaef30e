//! Custody (WaaS) client: `WaasClient` with nested sub-client accessors.
//!
//! Every endpoint is a POST under `{host}/api/{version}`. Each domain has its
//! own sub-client in `custody/<name>.rs`; this module keeps the builder and
//! the accessors.

pub mod account;
pub mod billing;
pub mod coin;
pub mod user;

pub use account::Accounts;
pub use billing::{Billing, WithdrawRequest};
pub use coin::Coins;
pub use user::Users;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{normalize_base, ClientConfig, ClientOptions};
use crate::crypto::CryptoProvider;
use crate::error::SdkError;
use crate::http::{Envelope, Transport};
use crate::logger::Logger;
use crate::network::{DEFAULT_API_VERSION, DEFAULT_WAAS_HOST};
use crate::notify::Notifications;
use crate::shared::{ApiResponse, Params};

/// Default `charset` injected into custody requests.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Entry point for the custody API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.users()`, `client.billing()`, etc.
#[derive(Clone, Debug)]
pub struct WaasClient {
    pub(crate) envelope: Envelope,
}

impl WaasClient {
    pub fn builder() -> WaasClientBuilder {
        WaasClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        self.envelope.config()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn billing(&self) -> Billing<'_> {
        Billing { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn async_notify(&self) -> Notifications<'_> {
        Notifications {
            config: self.config(),
            label: "[AsyncNotify]",
        }
    }

    pub(crate) fn post(&self, path: &str, params: Params) -> ApiResponse {
        self.envelope.post(path, params)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WaasClientBuilder {
    host: String,
    version: String,
    options: ClientOptions,
}

impl Default for WaasClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_WAAS_HOST.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            options: ClientOptions::new(DEFAULT_CHARSET),
        }
    }
}

impl WaasClientBuilder {
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn app_id(mut self, app_id: &str) -> Self {
        self.options.app_id = app_id.to_string();
        self
    }

    /// Merchant private key (PEM or bare Base64 body).
    pub fn private_key(mut self, key: &str) -> Self {
        self.options.private_key = key.to_string();
        self
    }

    /// Platform public key (PEM or bare Base64 body).
    pub fn public_key(mut self, key: &str) -> Self {
        self.options.public_key = key.to_string();
        self
    }

    pub fn sign_private_key(mut self, key: &str) -> Self {
        self.options.sign_private_key = Some(key.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn charset(mut self, charset: &str) -> Self {
        self.options.charset = charset.to_string();
        self
    }

    /// Enable request/response debug logging through the default logger.
    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.options.user_agent = user_agent.to_string();
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.options.logger = Some(logger);
        self
    }

    /// Replace the key-based default with a custom provider (HSM, KMS).
    pub fn crypto_provider(mut self, provider: Arc<dyn CryptoProvider>) -> Self {
        self.options.crypto_provider = Some(provider);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.options.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<WaasClient, SdkError> {
        let host = normalize_base("host", &self.host)?;
        let version = self.version.trim().trim_matches('/');
        if version.is_empty() {
            return Err(SdkError::Config("version is required".to_string()));
        }

        let config = self
            .options
            .resolve(format!("{}/api/{}", host, version))?;
        Ok(WaasClient {
            envelope: Envelope::new(Arc::new(config)),
        })
    }
}
