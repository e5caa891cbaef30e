//! Withdrawals sub-client.

use serde::Serialize;
use serde_json::json;

use crate::error::SdkError;
use crate::mpc::{MpcClient, WITHDRAW_SIGN_FIELDS};
use crate::shared::{is_blank, join_ids, params, require, require_id, to_params, ApiResponse};

/// An MPC withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MpcWithdrawRequest {
    pub request_id: String,
    pub sub_wallet_id: u64,
    pub symbol: String,
    pub amount: String,
    pub address_to: String,
    /// Source address for the transfer.
    #[serde(skip_serializing_if = "is_blank")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub remark: Option<String>,
    /// UTXO outputs for BTC-like coins.
    #[serde(skip_serializing_if = "is_blank")]
    pub outputs: Option<String>,
    /// Attach a transaction signature made with the signing key.
    #[serde(skip)]
    pub need_transaction_sign: bool,
}

pub struct Withdrawals<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> Withdrawals<'a> {
    pub fn withdraw(&self, request: &MpcWithdrawRequest) -> Result<ApiResponse, SdkError> {
        require("request_id", &request.request_id)?;
        require_id("sub_wallet_id", request.sub_wallet_id)?;
        require("symbol", &request.symbol)?;
        require("amount", &request.amount)?;
        require("address_to", &request.address_to)?;

        let mut body = to_params(request)?;
        if request.need_transaction_sign {
            self.client.ensure_signing_key()?;
            self.client.attach_signature(&WITHDRAW_SIGN_FIELDS, &mut body)?;
        }

        Ok(self.client.post("/api/mpc/billing/withdraw", body))
    }

    /// Withdrawals by merchant request id (up to 100).
    pub fn get_withdraw_records<T: ToString>(
        &self,
        request_ids: &[T],
    ) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("request_ids", request_ids)?;
        Ok(self
            .client
            .get("/api/mpc/billing/withdraw_list", params([("ids", json!(ids))])))
    }

    pub fn sync_withdraw_records(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get(
            "/api/mpc/billing/sync_withdraw_list",
            params([("max_id", json!(max_id))]),
        ))
    }
}
