//! Auto-sweep sub-client — collecting sub-wallet balances.

use serde_json::json;

use crate::error::SdkError;
use crate::mpc::MpcClient;
use crate::shared::{params, require, ApiResponse};

pub struct AutoSweep<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> AutoSweep<'a> {
    /// Sub-wallets with auto-sweep enabled for a coin.
    pub fn auto_collect_sub_wallets(&self, symbol: &str) -> Result<ApiResponse, SdkError> {
        require("symbol", symbol)?;
        Ok(self.client.get(
            "/api/mpc/auto_collect/sub_wallets",
            params([("symbol", json!(symbol))]),
        ))
    }

    /// Set the sweep threshold and fee cap for a coin.
    pub fn set_auto_collect_symbol(
        &self,
        symbol: &str,
        collect_min: &str,
        fueling_limit: &str,
    ) -> Result<ApiResponse, SdkError> {
        require("symbol", symbol)?;
        require("collect_min", collect_min)?;
        require("fueling_limit", fueling_limit)?;
        Ok(self.client.post(
            "/api/mpc/auto_collect/symbol/set",
            params([
                ("symbol", json!(symbol)),
                ("collect_min", json!(collect_min)),
                ("fueling_limit", json!(fueling_limit)),
            ]),
        ))
    }

    pub fn sync_auto_collect_records(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get(
            "/api/mpc/billing/sync_auto_collect_list",
            params([("max_id", json!(max_id))]),
        ))
    }
}
