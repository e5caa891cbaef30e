//! Wallets sub-client — sub-wallets and their addresses.

use serde::Serialize;
use serde_json::json;

use crate::error::SdkError;
use crate::mpc::MpcClient;
use crate::shared::{join_ids, params, require, require_id, to_params, ApiResponse};

/// Maximum sub-wallet name length in bytes.
pub const MAX_WALLET_NAME_LEN: usize = 50;

/// Whether a sub-wallet is shown in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowStatus {
    Show = 1,
    Hide = 2,
}

impl ShowStatus {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ShowStatus {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Show),
            2 => Ok(Self::Hide),
            other => Err(SdkError::Validation(format!(
                "Parameter \"app_show_status\" must be 1 or 2, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateWalletRequest {
    pub sub_wallet_name: String,
    /// 1 = show, 2 = hide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_show_status: Option<u8>,
}

pub struct Wallets<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> Wallets<'a> {
    pub fn create_wallet(&self, request: &CreateWalletRequest) -> Result<ApiResponse, SdkError> {
        require("sub_wallet_name", &request.sub_wallet_name)?;
        if request.sub_wallet_name.len() > MAX_WALLET_NAME_LEN {
            return Err(SdkError::Validation(format!(
                "Wallet name cannot be longer than {} bytes",
                MAX_WALLET_NAME_LEN
            )));
        }
        if let Some(status) = request.app_show_status {
            ShowStatus::try_from(status)?;
        }
        Ok(self
            .client
            .post("/api/mpc/sub_wallet/create", to_params(request)?))
    }

    pub fn create_wallet_address(
        &self,
        sub_wallet_id: u64,
        symbol: &str,
    ) -> Result<ApiResponse, SdkError> {
        require_id("sub_wallet_id", sub_wallet_id)?;
        require("symbol", symbol)?;
        Ok(self.client.post(
            "/api/mpc/sub_wallet/create/address",
            params([
                ("sub_wallet_id", json!(sub_wallet_id)),
                ("symbol", json!(symbol)),
            ]),
        ))
    }

    /// Addresses of a sub-wallet with an id greater than `max_id`.
    pub fn query_wallet_address(
        &self,
        sub_wallet_id: u64,
        symbol: &str,
        max_id: u64,
    ) -> Result<ApiResponse, SdkError> {
        require_id("sub_wallet_id", sub_wallet_id)?;
        require("symbol", symbol)?;
        Ok(self.client.post(
            "/api/mpc/sub_wallet/get/address/list",
            params([
                ("sub_wallet_id", json!(sub_wallet_id)),
                ("symbol", json!(symbol)),
                ("max_id", json!(max_id)),
            ]),
        ))
    }

    pub fn get_wallet_assets(
        &self,
        sub_wallet_id: u64,
        symbol: &str,
    ) -> Result<ApiResponse, SdkError> {
        require_id("sub_wallet_id", sub_wallet_id)?;
        require("symbol", symbol)?;
        Ok(self.client.get(
            "/api/mpc/sub_wallet/assets",
            params([
                ("sub_wallet_id", json!(sub_wallet_id)),
                ("symbol", json!(symbol)),
            ]),
        ))
    }

    pub fn change_wallet_show_status(
        &self,
        sub_wallet_ids: &[u64],
        status: ShowStatus,
    ) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("sub_wallet_ids", sub_wallet_ids)?;
        Ok(self.client.post(
            "/api/mpc/sub_wallet/change_show_status",
            params([
                ("sub_wallet_ids", json!(ids)),
                ("app_show_status", json!(status.as_u8())),
            ]),
        ))
    }

    /// Which sub-wallet owns an address.
    pub fn wallet_address_info(
        &self,
        address: &str,
        memo: Option<&str>,
    ) -> Result<ApiResponse, SdkError> {
        require("address", address)?;
        let mut query = params([("address", json!(address))]);
        if let Some(memo) = memo.filter(|m| !m.is_empty()) {
            query.insert("memo".to_string(), json!(memo));
        }
        Ok(self.client.get("/api/mpc/sub_wallet/address/info", query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_status_conversion() {
        assert_eq!(ShowStatus::try_from(1).unwrap(), ShowStatus::Show);
        assert_eq!(ShowStatus::try_from(2).unwrap().as_u8(), 2);
        assert!(ShowStatus::try_from(0).is_err());
        assert!(ShowStatus::try_from(3).is_err());
    }
}
