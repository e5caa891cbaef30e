//! Integration tests for the webhook notification codec.

mod common;

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::Level;

use common::*;
use waas_sdk::prelude::*;

#[test]
fn test_notify_request_decrypts_platform_payload() {
    let transport = StubTransport::new();
    let client = waas_client(&transport);
    let payload = json!({
        "side": "deposit",
        "notify_time": "2024-05-01 12:00:00",
        "request_id": "",
        "uid": 7,
        "symbol": "ETH",
        "amount": "0.25",
        "txid": "0xfeed",
        "remark": "充值"
    });
    let cipher = server().encrypt_with_private_key(&payload.to_string()).unwrap();

    assert_eq!(client.async_notify().notify_request(&cipher), Some(payload));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_verify_request_decrypts() {
    let transport = StubTransport::new();
    let client = mpc_client(&transport);
    let payload = json!({"side": "withdraw", "sub_wallet_id": 1000537, "request_id": "MW-1"});
    let cipher = server().encrypt_with_private_key(&payload.to_string()).unwrap();

    assert_eq!(client.notify().verify_request(&cipher), Some(payload));
}

#[test]
fn test_failures_return_none() {
    let transport = StubTransport::new();
    let logger = Arc::new(RecordingLogger::default());
    let client = waas_builder(&transport)
        .logger(logger.clone())
        .build()
        .unwrap();
    let notify = client.async_notify();

    assert_eq!(notify.notify_request(""), None);
    assert_eq!(notify.notify_request("%%%"), None);
    assert_eq!(notify.verify_request("AAAA"), None);

    let not_json = server().encrypt_with_private_key("not json").unwrap();
    assert_eq!(notify.notify_request(&not_json), None);

    let empty_object = server().encrypt_with_private_key("{}").unwrap();
    assert_eq!(notify.verify_request(&empty_object), None);

    // Empty input is silent; the others are logged as errors.
    assert_eq!(logger.messages(Level::ERROR).len(), 4);
}

#[test]
fn test_verify_response_round_trip() {
    #[derive(Serialize)]
    struct Approval<'a> {
        check_sum: &'a str,
        status: u8,
        remark: &'a str,
    }

    let transport = StubTransport::new();
    let client = waas_client(&transport);
    let approval = Approval {
        check_sum: "abc123",
        status: 2,
        remark: "已审核",
    };

    let cipher = client
        .async_notify()
        .verify_response(&approval)
        .expect("approval should encrypt");

    let raw = server().decrypt_with_public_key(&cipher).unwrap();
    assert_eq!(raw, r#"{"check_sum":"abc123","status":2,"remark":"已审核"}"#);
}

#[test]
fn test_verify_response_rejects_empty_payload() {
    let transport = StubTransport::new();
    let client = mpc_client(&transport);

    assert_eq!(client.notify().verify_response(&json!({})), None);
    assert_eq!(client.notify().verify_response(&json!(null)), None);
    assert_eq!(client.notify().verify_response(&Vec::<u8>::new()), None);
}
