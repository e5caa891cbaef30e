//! Web3 sub-client — contract interactions.

use serde::Serialize;
use serde_json::json;

use crate::error::SdkError;
use crate::mpc::{MpcClient, WEB3_SIGN_FIELDS};
use crate::shared::{is_blank, join_ids, params, require, require_id, to_params, ApiResponse};

/// A Web3 transaction.
///
/// `amount` and `input_data` are always sent and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Web3TransRequest {
    pub request_id: String,
    pub sub_wallet_id: u64,
    pub main_chain_symbol: String,
    pub interactive_contract: String,
    pub amount: String,
    /// Gas price in Gwei.
    pub gas_price: String,
    pub gas_limit: String,
    /// Hex-encoded call data.
    pub input_data: String,
    /// `0` = authorization, `1` = other.
    pub trans_type: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub dapp_name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub dapp_url: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub dapp_img: Option<String>,
    #[serde(skip)]
    pub need_transaction_sign: bool,
}

pub struct Web3<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> Web3<'a> {
    pub fn create_web3_trans(&self, request: &Web3TransRequest) -> Result<ApiResponse, SdkError> {
        require("request_id", &request.request_id)?;
        require_id("sub_wallet_id", request.sub_wallet_id)?;
        require("main_chain_symbol", &request.main_chain_symbol)?;
        require("interactive_contract", &request.interactive_contract)?;
        require("gas_price", &request.gas_price)?;
        require("gas_limit", &request.gas_limit)?;
        require("trans_type", &request.trans_type)?;

        let mut body = to_params(request)?;
        if request.need_transaction_sign {
            self.client.ensure_signing_key()?;
            self.client.attach_signature(&WEB3_SIGN_FIELDS, &mut body)?;
        }

        Ok(self.client.post("/api/mpc/web3/trans/create", body))
    }

    /// Speed up a pending transaction with a higher gas price.
    pub fn acceleration_web3_trans(
        &self,
        trans_id: u64,
        gas_price: &str,
        gas_limit: &str,
    ) -> Result<ApiResponse, SdkError> {
        require_id("trans_id", trans_id)?;
        require("gas_price", gas_price)?;
        require("gas_limit", gas_limit)?;
        Ok(self.client.post(
            "/api/mpc/web3/pending",
            params([
                ("trans_id", json!(trans_id)),
                ("gas_price", json!(gas_price)),
                ("gas_limit", json!(gas_limit)),
            ]),
        ))
    }

    pub fn get_web3_records<T: ToString>(
        &self,
        request_ids: &[T],
    ) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("request_ids", request_ids)?;
        Ok(self
            .client
            .get("/api/mpc/web3/trans_list", params([("ids", json!(ids))])))
    }

    pub fn sync_web3_records(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get(
            "/api/mpc/web3/sync_trans_list",
            params([("max_id", json!(max_id))]),
        ))
    }
}
