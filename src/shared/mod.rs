//! Shared types used by every client: the uniform [`ApiResponse`], request
//! [`Params`], local status codes and parameter helpers.

pub mod sign;

pub use sign::{sort_params, trim_amount};

use crate::error::SdkError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request parameters in insertion order.
pub type Params = Map<String, Value>;

// ─── Status codes ────────────────────────────────────────────────────────────

/// Success code returned by the platform.
pub const CODE_SUCCESS: i64 = 0;

/// Local failure: transport error, non-200 status, or request could not be built.
pub const CODE_REQUEST_FAILED: i64 = -1;

/// Response body was not valid JSON.
pub const CODE_INVALID_RESPONSE: i64 = -2;

/// Response `data` could not be decrypted.
pub const CODE_DECRYPT_FAILED: i64 = -3;

/// Decrypted payload was not valid JSON.
pub const CODE_INVALID_PAYLOAD: i64 = -4;

// ─── ApiResponse ─────────────────────────────────────────────────────────────

/// Uniform result of every endpoint call.
///
/// `code == 0` is success. Positive and platform-defined codes are domain
/// errors passed through verbatim; the negative `CODE_*` constants are
/// reserved for local failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    pub fn new(code: i64, msg: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
        }
    }

    /// A local failure with no data.
    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self::new(code, msg, Value::Null)
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Deserialize `data` into a typed value.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, SdkError> {
        Ok(serde_json::from_value(self.data)?)
    }

    /// Lift `code`/`msg`/`data` out of a JSON payload, using the given
    /// defaults for absent or null fields.
    pub(crate) fn from_payload(payload: &Value, default_code: i64, default_msg: &str) -> Self {
        let code = lift_code(payload.get("code"), default_code);
        let msg = match payload.get("msg") {
            None | Some(Value::Null) => default_msg.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let data = payload.get("data").cloned().unwrap_or(Value::Null);
        Self { code, msg, data }
    }
}

/// Interpret a wire `code`: integers as-is, numeric strings parsed, anything
/// else non-null becomes [`CODE_REQUEST_FAILED`].
fn lift_code(value: Option<&Value>, default: i64) -> i64 {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(CODE_REQUEST_FAILED),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(CODE_REQUEST_FAILED),
        Some(_) => CODE_REQUEST_FAILED,
    }
}

// ─── Parameter helpers ───────────────────────────────────────────────────────

/// Build [`Params`] from literal pairs.
pub(crate) fn params<const N: usize>(pairs: [(&str, Value); N]) -> Params {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Serialize a request struct into [`Params`].
pub(crate) fn to_params<T: Serialize>(request: &T) -> Result<Params, SdkError> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(SdkError::Validation(format!(
            "request must serialize to an object, got {}",
            other
        ))),
    }
}

/// `skip_serializing_if` predicate for optional fields sent only when non-empty.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Fail with a validation error when a required string is empty.
pub(crate) fn require(field: &str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!(
            "Parameter \"{}\" is required",
            field
        )));
    }
    Ok(())
}

/// Fail with a validation error when a required id is zero.
pub(crate) fn require_id(field: &str, id: u64) -> Result<(), SdkError> {
    if id == 0 {
        return Err(SdkError::Validation(format!(
            "Parameter \"{}\" is required",
            field
        )));
    }
    Ok(())
}

/// Join ids with `,`; an empty list is a validation error.
pub(crate) fn join_ids<T: ToString>(field: &str, ids: &[T]) -> Result<String, SdkError> {
    if ids.is_empty() {
        return Err(SdkError::Validation(format!(
            "Parameter \"{}\" must be a non-empty list",
            field
        )));
    }
    Ok(ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(","))
}
