//! TRON resources sub-client — buying energy and bandwidth.

use serde::Serialize;
use serde_json::json;

use crate::error::SdkError;
use crate::mpc::MpcClient;
use crate::shared::{is_blank, join_ids, params, require, to_params, ApiResponse};

/// Purchase of TRON energy or bandwidth for an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TronDelegateRequest {
    pub request_id: String,
    /// Buy type, default 0. Types 0 and 2 need `address_to` and `contract_address`.
    pub buy_type: u8,
    /// 0 = energy, 1 = bandwidth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<u8>,
    pub service_charge_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_num: Option<u64>,
    /// Address paying for the resources.
    pub address_from: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub address_to: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub contract_address: Option<String>,
}

impl TronDelegateRequest {
    fn validate(&self) -> Result<(), SdkError> {
        require("request_id", &self.request_id)?;
        require("address_from", &self.address_from)?;
        require("service_charge_type", &self.service_charge_type)?;

        if matches!(self.buy_type, 0 | 2) {
            let present = |field: &Option<String>| {
                field.as_deref().is_some_and(|value| !value.trim().is_empty())
            };
            if !present(&self.address_to) || !present(&self.contract_address) {
                return Err(SdkError::Validation(
                    "For buy_type 0 or 2, address_to and contract_address are required"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}

pub struct TronResources<'a> {
    pub(crate) client: &'a MpcClient,
}

impl<'a> TronResources<'a> {
    pub fn create_tron_delegate(
        &self,
        request: &TronDelegateRequest,
    ) -> Result<ApiResponse, SdkError> {
        request.validate()?;
        Ok(self
            .client
            .post("/api/mpc/tron/delegate", to_params(request)?))
    }

    pub fn get_buy_resource_records<T: ToString>(
        &self,
        request_ids: &[T],
    ) -> Result<ApiResponse, SdkError> {
        let ids = join_ids("request_ids", request_ids)?;
        Ok(self.client.post(
            "/api/mpc/tron/delegate/trans_list",
            params([("ids", json!(ids))]),
        ))
    }

    pub fn sync_buy_resource_records(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self.client.post(
            "/api/mpc/tron/delegate/sync_trans_list",
            params([("max_id", json!(max_id))]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(buy_type: u8) -> TronDelegateRequest {
        TronDelegateRequest {
            request_id: "T1".to_string(),
            buy_type,
            service_charge_type: "10010".to_string(),
            address_from: "TFrom".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_buy_type_0_and_2_need_target() {
        assert!(request(0).validate().is_err());
        assert!(request(2).validate().is_err());
        assert!(request(1).validate().is_ok());

        let complete = TronDelegateRequest {
            address_to: Some("TTo".to_string()),
            contract_address: Some("TContract".to_string()),
            ..request(0)
        };
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn test_default_buy_type_is_serialized() {
        let params = to_params(&request(1)).unwrap();
        assert_eq!(params["buy_type"], 1);
        assert_eq!(to_params(&TronDelegateRequest::default()).unwrap()["buy_type"], 0);
        assert!(!params.contains_key("energy_num"));
    }
}
