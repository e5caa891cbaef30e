//! Workspace sub-client — chain and coin metadata.

use serde::Serialize;
use serde_json::json;

use crate::error::SdkError;
use crate::mpc::MpcClient;
use crate::shared::{is_blank, params, require, to_params, ApiResponse, Params};

/// Filters for [`Workspace::get_coin_details`]. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoinDetailsQuery {
    /// Coin identifier, e.g. `USDTERC20`.
    #[serde(skip_serializing_if = "is_blank")]
    pub symbol: Option<String>,
    /// Main chain coin, e.g. `ETH`.
    #[serde(skip_serializing_if = "is_blank")]
    pub base_symbol: Option<String>,
    /// `true` for opened coins, `false` for unopened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_chain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

pub struct Workspace<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> Workspace<'a> {
    /// Main chains the workspace supports.
    pub fn get_support_main_chain(&self) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get("/api/mpc/wallet/open_coin", Params::new()))
    }

    pub fn get_coin_details(&self, query: &CoinDetailsQuery) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get("/api/mpc/coin_list", to_params(query)?))
    }

    pub fn get_last_block_height(&self, base_symbol: &str) -> Result<ApiResponse, SdkError> {
        require("base_symbol", base_symbol)?;
        Ok(self.client.get(
            "/api/mpc/chain_height",
            params([("base_symbol", json!(base_symbol))]),
        ))
    }
}
