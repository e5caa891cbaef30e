//! # WaaS SDK
//!
//! A Rust SDK for the ChainUp WaaS custody API and the MPC wallet API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — `ApiResponse`, request params, sign-string canonicalization
//! 2. **Crypto** — URL-safe Base64, segmented RSA, RSA-SHA256, `CryptoProvider`
//! 3. **Logging** — injectable `Logger` (`tracing`-backed by default)
//! 4. **HTTP** — `Transport` seam (`reqwest` blocking by default) and the
//!    request/response `Envelope`
//! 5. **Clients** — `WaasClient` and `MpcClient` with nested sub-clients, plus
//!    the webhook notification codec
//!
//! Every request is a single blocking round trip: parameters are serialized
//! to JSON, encrypted with the merchant private key and sent as
//! `{app_id, data}`; the response `data` is decrypted with the platform
//! public key.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waas_sdk::prelude::*;
//!
//! let client = MpcClient::builder()
//!     .domain("https://openapi.example.com")
//!     .app_id("your-app-id")
//!     .rsa_private_key(PRIVATE_KEY)
//!     .waas_public_key(PLATFORM_PUBLIC_KEY)
//!     .build()?;
//!
//! let chains = client.workspace().get_support_main_chain()?;
//! if chains.is_success() {
//!     println!("{}", chains.data);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Uniform response type, params, and sign-string canonicalization.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Default hosts, timeouts and user agent.
pub mod network;

// ── Layer 2: Crypto ──────────────────────────────────────────────────────────

/// Base64 URL-safe codec, segmented RSA cipher, signer, crypto provider.
pub mod crypto;

// ── Layer 3: Logging ─────────────────────────────────────────────────────────

/// Logger capability and default implementations.
pub mod logger;

// ── Layer 4: HTTP ────────────────────────────────────────────────────────────

/// Transport seam and the request/response envelope.
pub mod http;

/// Validated client configuration.
pub mod config;

// ── Layer 5: Clients ─────────────────────────────────────────────────────────

/// Webhook notification codec.
pub mod notify;

/// `WaasClient` — custody API.
pub mod custody;

/// `MpcClient` — MPC wallet API.
pub mod mpc;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Responses
    pub use crate::shared::{ApiResponse, Params};

    // Errors
    pub use crate::error::{CryptoError, HttpError, SdkError};

    // Crypto
    pub use crate::crypto::{CryptoProvider, RsaCryptoProvider};

    // Logging
    pub use crate::logger::{Logger, NoopLogger, TracingLogger};

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

    // Config
    pub use crate::config::ClientConfig;

    // Custody client + sub-clients
    pub use crate::custody::{
        Accounts, Billing, Coins, Users, WaasClient, WaasClientBuilder, WithdrawRequest,
    };

    // MPC client + sub-clients
    pub use crate::mpc::{
        AutoSweep, CoinDetailsQuery, CreateWalletRequest, Deposits, MpcClient, MpcClientBuilder,
        MpcWithdrawRequest, ShowStatus, TronDelegateRequest, TronResources, Wallets, Web3,
        Web3TransRequest, Withdrawals, Workspace,
    };

    // Notifications
    pub use crate::notify::Notifications;
}
