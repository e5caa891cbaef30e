//! Billing sub-client — withdrawals, deposits and miner fees.

use serde::Serialize;
use serde_json::json;

use crate::custody::WaasClient;
use crate::error::SdkError;
use crate::shared::{is_blank, join_ids, params, require, to_params, ApiResponse};

/// A custody withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WithdrawRequest {
    /// Merchant-side idempotency key.
    pub request_id: String,
    pub from_uid: u64,
    pub to_address: String,
    pub amount: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub remark: Option<String>,
}

pub struct Billing<'a> {
    pub(crate) client: &'a WaasClient,
}

impl<'a> Billing<'a> {
    pub fn withdraw(&self, request: &WithdrawRequest) -> Result<ApiResponse, SdkError> {
        require("request_id", &request.request_id)?;
        require("to_address", &request.to_address)?;
        require("amount", &request.amount)?;
        require("symbol", &request.symbol)?;
        Ok(self.client.post("/billing/withdraw", to_params(request)?))
    }

    /// Withdrawals by merchant request id.
    pub fn withdraw_list<T: ToString>(&self, request_ids: &[T]) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("request_ids", request_ids)?;
        Ok(self
            .client
            .post("/billing/withdrawList", params([("ids", json!(ids))])))
    }

    pub fn sync_withdraw_list(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.post(
            "/billing/syncWithdrawList",
            params([("max_id", json!(max_id))]),
        ))
    }

    /// Deposits by platform id.
    pub fn deposit_list<T: ToString>(&self, waas_ids: &[T]) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("waas_ids", waas_ids)?;
        Ok(self
            .client
            .post("/billing/depositList", params([("ids", json!(ids))])))
    }

    pub fn sync_deposit_list(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.post(
            "/billing/syncDepositList",
            params([("max_id", json!(max_id))]),
        ))
    }

    /// Miner fee records by platform id.
    pub fn miner_fee_list<T: ToString>(&self, waas_ids: &[T]) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("waas_ids", waas_ids)?;
        Ok(self
            .client
            .post("/billing/minerFeeList", params([("ids", json!(ids))])))
    }

    pub fn sync_miner_fee_list(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.post(
            "/billing/syncMinerFeeList",
            params([("max_id", json!(max_id))]),
        ))
    }
}
