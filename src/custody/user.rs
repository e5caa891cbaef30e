//! Users sub-client — registration, lookup and sync.

use serde_json::json;

use crate::custody::WaasClient;
use crate::error::SdkError;
use crate::shared::{params, require, ApiResponse};

pub struct Users<'a> {
    pub(crate) client: &'a WaasClient,
}

impl<'a> Users<'a> {
    /// Register a user by mobile number.
    pub fn register_mobile_user(
        &self,
        country: &str,
        mobile: &str,
    ) -> Result<ApiResponse, SdkError> {
        require("country", country)?;
        require("mobile", mobile)?;
        Ok(self.client.post(
            "/user/createUser",
            params([("country", json!(country)), ("mobile", json!(mobile))]),
        ))
    }

    /// Register a user by email.
    pub fn register_email_user(&self, email: &str) -> Result<ApiResponse, SdkError> {
        require("email", email)?;
        Ok(self
            .client
            .post("/user/registerEmail", params([("email", json!(email))])))
    }

    pub fn get_mobile_user(&self, country: &str, mobile: &str) -> Result<ApiResponse, SdkError> {
        require("country", country)?;
        require("mobile", mobile)?;
        Ok(self.client.post(
            "/user/info",
            params([("country", json!(country)), ("mobile", json!(mobile))]),
        ))
    }

    pub fn get_email_user(&self, email: &str) -> Result<ApiResponse, SdkError> {
        require("email", email)?;
        Ok(self
            .client
            .post("/user/info", params([("email", json!(email))])))
    }

    /// Users with an id greater than `max_id`, in pages.
    pub fn sync_user_list(&self, max_id: u64) -> Result<ApiResponse, SdkError> {
        Ok(self
            .client
            .post("/user/syncList", params([("max_id", json!(max_id))])))
    }
}
