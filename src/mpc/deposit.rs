//! Deposits sub-client.

use serde_json::json;

use crate::error::SdkError;
use crate::mpc::MpcClient;
use crate::shared::{join_ids, params, ApiResponse};

pub struct Deposits<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> Deposits<'a> {
    /// Deposit records by id (up to 100).
    pub fn get_deposit_records(&self, ids: &[u64]) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("ids", ids)?;
        Ok(self
            .client
            .get("/api/mpc/billing/deposit_list", params([("ids", json!(ids))])))
    }

    pub fn sync_deposit_records(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.get(
            "/api/mpc/billing/sync_deposit_list",
            params([("max_id", json!(max_id))]),
        ))
    }
}
