//! Accounts sub-client — balances and deposit addresses.

use serde_json::json;

use crate::custody::WaasClient;
use crate::error::SdkError;
use crate::shared::{params, require, ApiResponse};

pub struct Accounts<'a> {
    pub(crate) client: &'a WaasClient,
}

impl<'a> Accounts<'a> {
    /// A user's balance for one coin.
    pub fn get_user_account(&self, uid: u64, symbol: &str) -> Result<ApiResponse, SdkError> {
        require("symbol", symbol)?;
        Ok(self.client.post(
            "/account/getByUidAndSymbol",
            params([("uid", json!(uid)), ("symbol", json!(symbol))]),
        ))
    }

    /// A user's deposit address for one coin.
    pub fn get_user_address(&self, uid: u64, symbol: &str) -> Result<ApiResponse, SdkError> {
        require("symbol", symbol)?;
        Ok(self.client.post(
            "/account/getDepositAddress",
            params([("uid", json!(uid)), ("symbol", json!(symbol))]),
        ))
    }

    /// The merchant's own balance for one coin.
    pub fn get_company_account(&self, symbol: &str) -> Result<ApiResponse, SdkError> {
        require("symbol", symbol)?;
        Ok(self.client.post(
            "/account/getCompanyBySymbol",
            params([("symbol", json!(symbol))]),
        ))
    }

    pub fn get_user_address_info(&self, address: &str) -> Result<ApiResponse, SdkError> {
        require("address", address)?;
        Ok(self.client.post(
            "/account/getDepositAddressInfo",
            params([("address", json!(address))]),
        ))
    }

    pub fn sync_user_address_list(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self
            .client
            .post("/address/syncList", params([("max_id", json!(max_id))])))
    }
}
