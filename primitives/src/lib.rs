//! `tessera-primitives` — foundational types for Tessera guest transactions.
//!
//! This crate provides the draft data model (inputs, outputs, intents),
//! status codes and errors, the binary/decimal encoding adapters, the wire
//! serializer that turns a [`Draft`] into the host request, and the receipt
//! decoder that recovers a transaction hash from the host's response buffer.
//!
//! Supports `#![no_std]` for WASM guest compatibility (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod encoding;
pub mod descriptors;
pub mod draft;
pub mod wire;
pub mod receipt;

// Re-export commonly used types at the crate root for convenience.
pub use types::{OutPoint, TxId, DEFAULT_RESPONSE_CAPACITY, TX_ID_LEN};
pub use error::{DraftError, ReceiptError, StatusCode};
pub use descriptors::{Input, Intent, Output};
pub use draft::{Draft, SignMode};
pub use receipt::{decode_receipt, find_json_end, HashKind, ReceiptMode, TxHash};
