//! Canonical sign strings for transaction signatures.
//!
//! Only a fixed subset of a transaction's fields is signed. The subset is
//! reduced to a canonical string: null, `false` and empty values dropped,
//! `amount` trimmed of trailing fractional zeros, keys in byte order, `k=v`
//! pairs joined with `&`, the whole string lower-cased.

use std::collections::BTreeMap;

use md5::{Digest, Md5};
use serde_json::Value;

use crate::crypto::CryptoProvider;
use crate::error::SdkError;
use crate::shared::Params;

const AMOUNT_FIELD: &str = "amount";

/// Build the canonical sign string for `params`.
pub fn sort_params(params: &Params) -> String {
    let sorted: BTreeMap<&str, String> = params
        .iter()
        .filter_map(|(key, value)| {
            let mut value = canonical_value(value)?;
            if key == AMOUNT_FIELD {
                value = trim_amount(&value);
            }
            Some((key.as_str(), value))
        })
        .collect();

    sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
        .to_ascii_lowercase()
}

/// Remove trailing zeros after the decimal point, then any trailing `.`.
///
/// `"1.0001000"` → `"1.0001"`, `"1.0"` → `"1"`, `"100"` unchanged.
pub fn trim_amount(amount: &str) -> String {
    let mut trimmed = amount;
    if let Some(dot) = trimmed.rfind('.') {
        let fraction = &trimmed[dot + 1..];
        if fraction.bytes().all(|b| b.is_ascii_digit()) {
            trimmed = trimmed.trim_end_matches('0');
        }
    }
    trimmed.trim_end_matches('.').to_string()
}

/// String form of a value, or `None` when it is dropped from the sign string.
fn canonical_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("1".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Sign the given field subset of `params` for a transaction.
///
/// The canonical string is MD5-hashed and the lowercase hex digest is signed
/// with RSA-SHA256 (Base64 output). Fields absent from `params` are treated
/// as empty.
pub(crate) fn transaction_signature(
    provider: &dyn CryptoProvider,
    fields: &[&str],
    params: &Params,
) -> Result<String, SdkError> {
    let subset: Params = fields
        .iter()
        .map(|field| {
            let value = params.get(*field).cloned().unwrap_or(Value::Null);
            (field.to_string(), value)
        })
        .collect();

    let sign_data = sort_params(&subset);
    if sign_data.is_empty() {
        return Err(SdkError::Validation(
            "Failed to generate sign data".to_string(),
        ));
    }

    let digest = hex::encode(Md5::digest(sign_data.as_bytes()));
    let signature = provider.sign(&digest, true)?;
    if signature.is_empty() {
        return Err(SdkError::Validation(
            "Failed to generate transaction signature".to_string(),
        ));
    }
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::RsaCryptoProvider;
    use crate::shared::params;
    use serde_json::json;

    #[test]
    fn test_sort_params_canonical_form() {
        let input = params([
            ("amount", json!("1.0001000")),
            ("symbol", json!("ETH")),
            ("request_id", json!("")),
            ("memo", Value::Null),
        ]);
        assert_eq!(sort_params(&input), "amount=1.0001&symbol=eth");
    }

    #[test]
    fn test_sort_params_orders_by_bytes() {
        let input = params([
            ("sub_wallet_id", json!(1000537)),
            ("address_to", json!("0xABC")),
            ("Zeta", json!("x")),
            ("request_id", json!("R1")),
        ]);
        assert_eq!(
            sort_params(&input),
            "zeta=x&address_to=0xabc&request_id=r1&sub_wallet_id=1000537"
        );
    }

    #[test]
    fn test_sort_params_value_coercion() {
        let input = params([
            ("a", json!(true)),
            ("b", json!(false)),
            ("c", json!(0)),
            ("d", json!(1.5)),
        ]);
        assert_eq!(sort_params(&input), "a=1&c=0&d=1.5");
    }

    #[test]
    fn test_sort_params_empty() {
        assert_eq!(sort_params(&Params::new()), "");
        assert_eq!(sort_params(&params([("memo", json!(""))])), "");
    }

    #[test]
    fn test_trim_amount() {
        assert_eq!(trim_amount("1.0"), "1");
        assert_eq!(trim_amount("1.100"), "1.1");
        assert_eq!(trim_amount("100"), "100");
        assert_eq!(trim_amount("1.0001000"), "1.0001");
        assert_eq!(trim_amount("100."), "100");
        assert_eq!(trim_amount("0.000"), "0");
        assert_eq!(trim_amount("1e10"), "1e10");
    }

    #[test]
    fn test_amount_number_is_trimmed() {
        let input = params([("amount", json!(2.50))]);
        assert_eq!(sort_params(&input), "amount=2.5");
    }

    #[test]
    fn test_transaction_signature_signs_md5_hex() {
        let provider = RsaCryptoProvider::new(
            include_str!("../../tests/fixtures/merchant_private.pem"),
            include_str!("../../tests/fixtures/platform_public.pem"),
        )
        .unwrap();
        let input = params([
            ("request_id", json!("R1")),
            ("symbol", json!("ETH")),
            ("amount", json!("1.50")),
            ("remark", json!("not signed")),
        ]);

        let signature =
            transaction_signature(&provider, &["request_id", "symbol", "amount"], &input).unwrap();

        let digest = hex::encode(Md5::digest(b"amount=1.5&request_id=r1&symbol=eth"));
        assert_eq!(signature, provider.sign(&digest, true).unwrap());
    }

    #[test]
    fn test_transaction_signature_rejects_empty_subset() {
        let provider = RsaCryptoProvider::new(
            include_str!("../../tests/fixtures/merchant_private.pem"),
            include_str!("../../tests/fixtures/platform_public.pem"),
        )
        .unwrap();
        let result = transaction_signature(&provider, &["memo"], &Params::new());
        assert!(matches!(result, Err(SdkError::Validation(_))));
    }
}
