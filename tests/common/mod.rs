//! Shared fixtures for integration tests.
//!
//! The stub transport records every request and replays queued responses.
//! The platform keypair plays the server: it decrypts requests with the
//! merchant public key and encrypts responses with the platform private key.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tracing::Level;

use waas_sdk::prelude::*;

pub const MERCHANT_PRIVATE: &str = include_str!("../fixtures/merchant_private.pem");
pub const MERCHANT_PUBLIC: &str = include_str!("../fixtures/merchant_public.pem");
pub const PLATFORM_PRIVATE: &str = include_str!("../fixtures/platform_private.pem");
pub const PLATFORM_PUBLIC: &str = include_str!("../fixtures/platform_public.pem");

pub const APP_ID: &str = "test-app";
pub const WAAS_HOST: &str = "https://waas.test";
pub const MPC_DOMAIN: &str = "https://mpc.test";

// ── Stub transport ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn respond_ok(&self, body: impl Into<String>) {
        self.respond(HttpResponse::ok(body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::Transport("connection refused".to_string()))
    }
}

// ── Recording logger ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str, _context: &Value) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

// ── Server side ──────────────────────────────────────────────────────────────

/// The platform's view of the key pairs.
pub fn server() -> RsaCryptoProvider {
    RsaCryptoProvider::new(PLATFORM_PRIVATE, MERCHANT_PUBLIC).unwrap()
}

/// Response body carrying `payload` encrypted as the platform would.
pub fn encrypted_body(payload: &Value) -> String {
    encrypted_raw_body(&payload.to_string())
}

pub fn encrypted_raw_body(raw: &str) -> String {
    let cipher = server().encrypt_with_private_key(raw).unwrap();
    json!({ "code": 0, "msg": "success", "data": cipher }).to_string()
}

/// Decrypt the `data` field of a recorded request.
pub fn decrypt_request(request: &HttpRequest) -> Value {
    serde_json::from_str(&decrypt_request_raw(request)).unwrap()
}

pub fn decrypt_request_raw(request: &HttpRequest) -> String {
    let data = request.form_value("data").expect("request has no data field");
    server().decrypt_with_public_key(data).unwrap()
}

// ── Clients ──────────────────────────────────────────────────────────────────

pub fn waas_builder(transport: &Arc<StubTransport>) -> WaasClientBuilder {
    WaasClient::builder()
        .host(WAAS_HOST)
        .app_id(APP_ID)
        .private_key(MERCHANT_PRIVATE)
        .public_key(PLATFORM_PUBLIC)
        .transport(transport.clone())
}

pub fn waas_client(transport: &Arc<StubTransport>) -> WaasClient {
    waas_builder(transport).build().unwrap()
}

pub fn mpc_builder(transport: &Arc<StubTransport>) -> MpcClientBuilder {
    MpcClient::builder()
        .domain(MPC_DOMAIN)
        .app_id(APP_ID)
        .rsa_private_key(MERCHANT_PRIVATE)
        .waas_public_key(PLATFORM_PUBLIC)
        .transport(transport.clone())
}

pub fn mpc_client(transport: &Arc<StubTransport>) -> MpcClient {
    mpc_builder(transport).build().unwrap()
}
