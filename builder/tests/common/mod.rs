//! Shared test helpers for integration tests.
//!
//! Provides stable identities, token ids, padded receipt buffers and
//! request parsing used across all integration test files.

#![allow(dead_code)]

use serde_json::Value;
use tessera_builder::MockHost;

// ── Identities ──

/// Deterministic 32-byte identity from a single seed byte.
pub fn identity(seed: u8) -> [u8; 32] {
    [seed; 32]
}

pub fn alice() -> [u8; 32] {
    identity(1)
}

pub fn bob() -> [u8; 32] {
    identity(2)
}

pub fn validator() -> [u8; 32] {
    identity(9)
}

pub const TOKEN: &[u8] = b"USDC";

/// A well-formed 32-byte transaction id.
pub fn tx_id(seed: u8) -> [u8; 32] {
    identity(0x80 | seed)
}

// ── Receipts ──

pub const UNSIGNED_RECEIPT: &str = r#"{"mode":"unsigned","unsigned_tx_hash":"deadbeef"}"#;

/// Host that answers every call with `receipt`.
pub fn host_with(receipt: &str) -> MockHost {
    MockHost::with_receipt(receipt.as_bytes())
}

// ── Request inspection ──

/// Parse the last request the host received.
pub fn last_request_json(host: &MockHost) -> Value {
    let bytes = host.last_request().expect("host received no request");
    serde_json::from_slice(bytes).expect("request is not JSON")
}

/// The `type` tags of a request array, in order.
pub fn types_of(request: &Value, array: &str) -> Vec<String> {
    request[array]
        .as_array()
        .expect("missing array")
        .iter()
        .map(|entry| entry["type"].as_str().expect("missing type").to_string())
        .collect()
}
