//! MPC wallet client: `MpcClient` with nested sub-client accessors.
//!
//! URLs are `{domain}{path}`; every path carries its own `/api/mpc/...`
//! prefix. Withdrawals and Web3 transactions can carry a transaction
//! signature, which requires a dedicated signing key.

pub mod auto_sweep;
pub mod deposit;
pub mod tron_resource;
pub mod wallet;
pub mod web3;
pub mod withdraw;
pub mod workspace;

pub use auto_sweep::AutoSweep;
pub use deposit::Deposits;
pub use tron_resource::{TronDelegateRequest, TronResources};
pub use wallet::{CreateWalletRequest, ShowStatus, Wallets};
pub use web3::{Web3, Web3TransRequest};
pub use withdraw::{MpcWithdrawRequest, Withdrawals};
pub use workspace::{CoinDetailsQuery, Workspace};

use std::sync::Arc;
use std::time::Duration;

use crate::config::{normalize_base, ClientConfig, ClientOptions};
use crate::crypto::CryptoProvider;
use crate::error::{CryptoError, SdkError};
use crate::http::{Envelope, Transport};
use crate::logger::Logger;
use crate::notify::Notifications;
use crate::shared::sign::transaction_signature;
use crate::shared::{ApiResponse, Params};

/// Default `charset` injected into MPC requests.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Fields covered by a withdrawal signature.
pub const WITHDRAW_SIGN_FIELDS: [&str; 7] = [
    "request_id",
    "sub_wallet_id",
    "symbol",
    "address_to",
    "amount",
    "memo",
    "outputs",
];

/// Fields covered by a Web3 transaction signature.
pub const WEB3_SIGN_FIELDS: [&str; 6] = [
    "request_id",
    "sub_wallet_id",
    "main_chain_symbol",
    "interactive_contract",
    "amount",
    "input_data",
];

/// Entry point for the MPC wallet API.
#[derive(Clone, Debug)]
pub struct MpcClient {
    pub(crate) envelope: Envelope,
}

impl MpcClient {
    pub fn builder() -> MpcClientBuilder {
        MpcClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        self.envelope.config()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn wallets(&self) -> Wallets<'_> {
        Wallets { client: self }
    }

    pub fn deposits(&self) -> Deposits<'_> {
        Deposits { client: self }
    }

    pub fn withdrawals(&self) -> Withdrawals<'_> {
        Withdrawals { client: self }
    }

    pub fn web3(&self) -> Web3<'_> {
        Web3 { client: self }
    }

    pub fn tron_resources(&self) -> TronResources<'_> {
        TronResources { client: self }
    }

    pub fn auto_sweep(&self) -> AutoSweep<'_> {
        AutoSweep { client: self }
    }

    pub fn workspace(&self) -> Workspace<'_> {
        Workspace { client: self }
    }

    pub fn notify(&self) -> Notifications<'_> {
        Notifications {
            config: self.config(),
            label: "[MpcNotify]",
        }
    }

    // ── Internal ─────────────────────────────────────────────────────────

    pub(crate) fn get(&self, path: &str, params: Params) -> ApiResponse {
        self.envelope.get(path, params)
    }

    pub(crate) fn post(&self, path: &str, params: Params) -> ApiResponse {
        self.envelope.post(path, params)
    }

    /// Fail fast when a signature is requested without a signing key.
    pub(crate) fn ensure_signing_key(&self) -> Result<(), SdkError> {
        if !self.config().crypto().supports_transaction_signing() {
            return Err(CryptoError::SigningKeyMissing.into());
        }
        Ok(())
    }

    /// Add a `sign` parameter over `fields` of `params`.
    pub(crate) fn attach_signature(
        &self,
        fields: &[&str],
        params: &mut Params,
    ) -> Result<(), SdkError> {
        let signature = transaction_signature(self.config().crypto(), fields, params)?;
        params.insert("sign".to_string(), signature.into());
        Ok(())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MpcClientBuilder {
    domain: String,
    options: ClientOptions,
}

impl Default for MpcClientBuilder {
    fn default() -> Self {
        Self {
            domain: String::new(),
            options: ClientOptions::new(DEFAULT_CHARSET),
        }
    }
}

impl MpcClientBuilder {
    /// API domain, e.g. `https://openapi.example.com`.
    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn app_id(mut self, app_id: &str) -> Self {
        self.options.app_id = app_id.to_string();
        self
    }

    /// Merchant RSA private key (PEM or bare Base64 body).
    pub fn rsa_private_key(mut self, key: &str) -> Self {
        self.options.private_key = key.to_string();
        self
    }

    /// Platform public key (PEM or bare Base64 body).
    pub fn waas_public_key(mut self, key: &str) -> Self {
        self.options.public_key = key.to_string();
        self
    }

    /// Dedicated key for withdrawal and Web3 transaction signatures.
    pub fn sign_private_key(mut self, key: &str) -> Self {
        self.options.sign_private_key = Some(key.to_string());
        self
    }

    pub fn charset(mut self, charset: &str) -> Self {
        self.options.charset = charset.to_string();
        self
    }

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

    pub fn crypto_provider(mut self, provider: Arc<dyn CryptoProvider>) -> Self {
        self.options.crypto_provider = Some(provider);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.options.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<MpcClient, SdkError> {
        let domain = normalize_base("domain", &self.domain)?;
        let config = self.options.resolve(domain)?;
        Ok(MpcClient {
            envelope: Envelope::new(Arc::new(config)),
        })
    }
}
