//! Coins sub-client.

use crate::custody::WaasClient;
use crate::error::SdkError;
use crate::shared::{ApiResponse, Params};

pub struct Coins<'a> {
    pub(crate) client: &'a WaasClient,
}

impl<'a> Coins<'a> {
    /// Coins enabled for the merchant.
    pub fn get_coin_list(&self) -> Result<ApiResponse, SdkError> {
        Ok(self.client.post("/user/getCoinList", Params::new()))
    }
}
