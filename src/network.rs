//! Network constants for the WaaS SDK.

/// Default custody (WaaS) API host.
pub const DEFAULT_WAAS_HOST: &str = "https://openapi.chainup.com";

/// Default custody API version segment (`{host}/api/{version}`).
pub const DEFAULT_API_VERSION: &str = "v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("waas-rust-sdk/", env!("CARGO_PKG_VERSION"));
