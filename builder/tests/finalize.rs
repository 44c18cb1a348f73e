//! End-to-end tests for the finalize pipeline:
//! TxBuilder → wire request → LedgerHost → padded receipt → TxHash.

mod common;

use tessera_builder::{BuilderConfig, FinalizeError, LedgerHost, MockHost, Outcome, TxBuilder};
use tessera_primitives::{HashKind, ReceiptError, ReceiptMode, SignMode, StatusCode};

use common::*;

// ── Test: receipt decoding through finalize ──

#[test]
fn test_unsigned_receipt_returns_hash() {
    let mut host = host_with(UNSIGNED_RECEIPT);
    let outcome = TxBuilder::begin()
        .transfer(alice(), bob(), TOKEN, 250)
        .finalize_outcome(&mut host);

    assert_eq!(
        outcome,
        Outcome {
            success: true,
            tx_hash: Some(vec![0xDE, 0xAD, 0xBE, 0xEF]),
            status: StatusCode::Success.as_u32(),
        }
    );
    assert_eq!(host.calls(), 1);
}

#[test]
fn test_error_field_wins_over_hash() {
    let mut host = host_with(r#"{"error":"insufficient funds","signed_tx_hash":"deadbeef"}"#);
    let result = TxBuilder::begin()
        .transfer(alice(), bob(), TOKEN, 1_000_000)
        .finalize(&mut host);

    assert_eq!(
        result,
        Err(FinalizeError::Receipt(ReceiptError::Rejected("insufficient funds".into())))
    );
    assert_eq!(result.unwrap_err().status(), StatusCode::ExecutionFailed.as_u32());
}

#[test]
fn test_unsigned_hash_preferred_over_signed() {
    let mut host = host_with(
        r#"{"mode":"paymaster","signed_tx_hash":"0202","unsigned_tx_hash":"0101"}"#,
    );
    let hash = TxBuilder::begin()
        .sign_mode(SignMode::Paymaster)
        .finalize(&mut host)
        .unwrap();

    assert_eq!(hash.bytes, vec![0x01, 0x01]);
    assert_eq!(hash.kind, HashKind::Unsigned);
    assert_eq!(hash.mode, Some(ReceiptMode::Paymaster));
}

#[test]
fn test_signed_only_receipt() {
    let mut host = host_with(r#"{"mode":"signed","signed_tx_hash":"0xABCDEF"}"#);
    let hash = TxBuilder::begin()
        .sign_mode(SignMode::Sign)
        .stake(alice(), 32, validator())
        .finalize(&mut host)
        .unwrap();

    assert_eq!(hash.bytes, vec![0xAB, 0xCD, 0xEF]);
    assert_eq!(hash.kind, HashKind::Signed);
}

#[test]
fn test_receipt_without_hash_fails() {
    let mut host = host_with(r#"{"mode":"unsigned"}"#);
    let outcome = TxBuilder::begin().finalize_outcome(&mut host);
    assert_eq!(
        outcome,
        Outcome { success: false, tx_hash: None, status: StatusCode::ExecutionFailed.as_u32() }
    );
}

#[test]
fn test_whitespace_padding_is_skipped() {
    let mut host = host_with(UNSIGNED_RECEIPT).with_padding(b' ');
    let hash = TxBuilder::begin().finalize(&mut host).unwrap();
    assert_eq!(hash.bytes, vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

// ── Test: host status and buffer limits ──

#[test]
fn test_host_status_is_verbatim() {
    let mut host = MockHost::failing(503);
    let result = TxBuilder::begin()
        .add_resource_output(b"blob")
        .finalize(&mut host);

    assert_eq!(result, Err(FinalizeError::Host(503)));
    assert_eq!(result.unwrap_err().status(), 503);
    assert_eq!(host.calls(), 1);
}

#[test]
fn test_receipt_larger_than_capacity_fails() {
    let config = BuilderConfig {
        response_capacity: 16,
        ..BuilderConfig::default()
    };
    let mut host = host_with(UNSIGNED_RECEIPT);
    let result = TxBuilder::with_config(config).finalize(&mut host);

    assert_eq!(result, Err(FinalizeError::Receipt(ReceiptError::MissingExtent)));
}

#[test]
fn test_empty_response_fails() {
    let mut host = host_with("");
    let result = TxBuilder::begin().finalize(&mut host);
    assert_eq!(result, Err(FinalizeError::Receipt(ReceiptError::MissingExtent)));
}

/// A host that checks the buffer it was handed.
struct CapacityProbe {
    seen: Option<usize>,
}

impl LedgerHost for CapacityProbe {
    fn build(&mut self, _request: &[u8], response: &mut [u8]) -> u32 {
        self.seen = Some(response.len());
        let receipt = br#"{"unsigned_tx_hash":"00"}"#;
        response[..receipt.len()].copy_from_slice(receipt);
        0
    }
}

#[test]
fn test_response_buffer_has_configured_capacity() {
    let mut probe = CapacityProbe { seen: None };
    TxBuilder::begin().finalize(&mut probe).unwrap();
    assert_eq!(probe.seen, Some(4096));

    let mut probe = CapacityProbe { seen: None };
    let config = BuilderConfig { response_capacity: 512, ..BuilderConfig::default() };
    TxBuilder::with_config(config).finalize(&mut probe).unwrap();
    assert_eq!(probe.seen, Some(512));
}

// ── Test: validation short-circuit ──

#[test]
fn test_invalid_outpoint_never_reaches_host() {
    let mut host = MockHost::auto();
    let outcome = TxBuilder::begin()
        .add_asset_output(bob(), TOKEN, 10)
        .add_input(&tx_id(1)[..16], 0, false, b"proof")
        .transfer(alice(), bob(), TOKEN, 10)
        .finalize_outcome(&mut host);

    assert_eq!(
        outcome,
        Outcome { success: false, tx_hash: None, status: StatusCode::ExecutionFailed.as_u32() }
    );
    assert_eq!(host.calls(), 0);
}

// ── Test: self-hashing host ──

#[test]
fn test_auto_host_hash_matches_request() {
    let mut host = MockHost::auto();
    let hash = TxBuilder::begin()
        .add_input(tx_id(1), 0, false, b"sig")
        .add_asset_output(bob(), TOKEN, 40)
        .finalize(&mut host)
        .unwrap();

    let request = host.last_request().unwrap();
    assert_eq!(hash.bytes, MockHost::expected_hash(request).to_vec());
    assert_eq!(hash.mode, Some(ReceiptMode::Unsigned));
}

#[test]
fn test_auto_host_follows_sign_mode() {
    let cases = [
        (SignMode::Sign, HashKind::Signed, ReceiptMode::Signed),
        (SignMode::DeferSign, HashKind::Unsigned, ReceiptMode::Unsigned),
        (SignMode::Delegated, HashKind::Unsigned, ReceiptMode::Delegated),
        (SignMode::Threshold, HashKind::Unsigned, ReceiptMode::Threshold),
    ];
    for (sign_mode, kind, mode) in cases {
        let mut host = MockHost::auto();
        let hash = TxBuilder::begin()
            .sign_mode(sign_mode)
            .finalize(&mut host)
            .unwrap();
        assert_eq!(hash.kind, kind, "{:?}", sign_mode);
        assert_eq!(hash.mode, Some(mode), "{:?}", sign_mode);
    }
}

#[test]
fn test_identical_drafts_hash_identically() {
    let build = || {
        TxBuilder::begin()
            .transfer(alice(), bob(), TOKEN, 7)
            .add_state_output(b"counter", 3, [0x11; 32])
    };

    let mut first = MockHost::auto();
    let mut second = MockHost::auto();
    let a = build().finalize(&mut first).unwrap();
    let b = build().finalize(&mut second).unwrap();
    assert_eq!(a, b);
    assert_eq!(first.requests(), second.requests());
}
