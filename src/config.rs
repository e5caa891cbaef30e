//! Client configuration: the options both builders collect, and the
//! immutable [`ClientConfig`] they resolve to.
//!
//! Validation is eager. `build()` fails before any network activity when the
//! host or app id is missing or the key material does not parse.

use std::sync::Arc;
use std::time::Duration;

use crate::crypto::{CryptoProvider, RsaCryptoProvider};
use crate::error::SdkError;
use crate::http::Transport;
use crate::logger::{Logger, TracingLogger};
use crate::network::{DEFAULT_TIMEOUT_SECS, USER_AGENT};

/// Resolved, validated configuration shared read-only by a client and all of
/// its sub-clients.
pub struct ClientConfig {
    base_url: String,
    app_id: String,
    charset: String,
    timeout: Duration,
    user_agent: String,
    debug: bool,
    crypto: Arc<dyn CryptoProvider>,
    logger: Arc<dyn Logger>,
    transport: Arc<dyn Transport>,
}

impl ClientConfig {
    /// Endpoint URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn crypto(&self) -> &dyn CryptoProvider {
        self.crypto.as_ref()
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("charset", &self.charset)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Options shared by the custody and MPC builders
// ═════════════════════════════════════════════════════════════════════════════

pub(crate) struct ClientOptions {
    pub(crate) app_id: String,
    pub(crate) private_key: String,
    pub(crate) public_key: String,
    pub(crate) sign_private_key: Option<String>,
    pub(crate) charset: String,
    pub(crate) debug: bool,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) logger: Option<Arc<dyn Logger>>,
    pub(crate) crypto_provider: Option<Arc<dyn CryptoProvider>>,
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl ClientOptions {
    pub(crate) fn new(charset: &str) -> Self {
        Self {
            app_id: String::new(),
            private_key: String::new(),
            public_key: String::new(),
            sign_private_key: None,
            charset: charset.to_string(),
            debug: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            logger: None,
            crypto_provider: None,
            transport: None,
        }
    }

    /// Validate and resolve against `base_url` (host or domain, already
    /// checked non-empty by the caller).
    pub(crate) fn resolve(self, base_url: String) -> Result<ClientConfig, SdkError> {
        if self.app_id.trim().is_empty() {
            return Err(SdkError::Config("app_id is required".to_string()));
        }

        let crypto: Arc<dyn CryptoProvider> = match &self.crypto_provider {
            Some(provider) => Arc::clone(provider),
            None => Arc::new(self.default_crypto()?),
        };

        let debug = self.debug;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new(debug)) as Arc<dyn Logger>);

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(ClientConfig {
            base_url,
            app_id: self.app_id,
            charset: self.charset,
            timeout: self.timeout,
            user_agent: self.user_agent,
            debug: self.debug,
            crypto,
            logger,
            transport,
        })
    }

    fn default_crypto(&self) -> Result<RsaCryptoProvider, SdkError> {
        if self.private_key.trim().is_empty() {
            return Err(SdkError::Config(
                "private key is required when no crypto provider is set".to_string(),
            ));
        }
        if self.public_key.trim().is_empty() {
            return Err(SdkError::Config(
                "public key is required when no crypto provider is set".to_string(),
            ));
        }

        let provider = RsaCryptoProvider::new(&self.private_key, &self.public_key)?;
        match self.sign_private_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(provider.with_signing_key(key)?),
            _ => Ok(provider),
        }
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Config(
        "a transport is required when the `http` feature is disabled".to_string(),
    ))
}

/// Trim a configured host or domain, rejecting empty values.
pub(crate) fn normalize_base(name: &str, value: &str) -> Result<String, SdkError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SdkError::Config(format!("{} is required", name)));
    }
    Ok(trimmed.to_string())
}
