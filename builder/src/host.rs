//! Ledger host port — abstraction over the single host build call.
//!
//! The `LedgerHost` trait decouples the builder from the execution
//! environment (WASM sandbox vs. native tests).
//!
//! - In WASM: implemented by calling the imported `build` host function
//! - In tests: implemented via `MockHost` (scripted or self-hashing receipts)
//!
//! Pointer/length pairs of the raw ABI become slices here: `request` is the
//! serialized draft and `response` is the guest-owned, fixed-capacity
//! receipt buffer.

use alloc::format;
use alloc::vec::Vec;
use tessera_primitives::{wire, Draft, SignMode, StatusCode};

/// Abstraction over the host's build entry point.
pub trait LedgerHost {
    /// Submit a serialized draft.
    ///
    /// The host writes its receipt into `response` and may leave any
    /// trailing bytes as padding. Returns `0` on success; any other value
    /// is a host status code that is surfaced to the caller verbatim.
    fn build(&mut self, request: &[u8], response: &mut [u8]) -> u32;
}

// ── MockHost: in-memory host for testing ──

/// How `MockHost` answers a build call.
#[derive(Debug, Clone)]
enum Reply {
    /// Write these bytes verbatim.
    Fixed(Vec<u8>),
    /// Hash the request with BLAKE3 and answer in the draft's sign mode.
    Auto,
}

/// In-memory host implementation for deterministic testing.
///
/// Records every request. Receipts longer than the response buffer are
/// truncated, the way a real host silently would; unused trailing bytes
/// are overwritten with a configurable padding byte.
#[derive(Debug, Clone)]
pub struct MockHost {
    reply: Reply,
    status: u32,
    padding: u8,
    requests: Vec<Vec<u8>>,
}

impl MockHost {
    /// Always answer with `receipt`.
    pub fn with_receipt(receipt: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: Reply::Fixed(receipt.into()),
            status: StatusCode::Success.as_u32(),
            padding: 0,
            requests: Vec::new(),
        }
    }

    /// Answer with a deterministic hash of the request.
    ///
    /// `sign` drafts get `signed_tx_hash`; every other mode gets
    /// `unsigned_tx_hash` with the matching `mode` tag. A request that is
    /// not a valid draft gets an `error` receipt.
    pub fn auto() -> Self {
        Self {
            reply: Reply::Auto,
            ..Self::with_receipt(Vec::new())
        }
    }

    /// Reject every call with `status`, writing nothing.
    pub fn failing(status: u32) -> Self {
        Self {
            status,
            ..Self::with_receipt(Vec::new())
        }
    }

    /// Use `padding` for the unused tail of the response buffer.
    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    /// Number of build calls received.
    pub fn calls(&self) -> usize {
        self.requests.len()
    }

    pub fn requests(&self) -> &[Vec<u8>] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&[u8]> {
        self.requests.last().map(Vec::as_slice)
    }

    /// The most recent request, decoded back into a draft.
    pub fn last_draft(&self) -> Option<Draft> {
        self.last_request()
            .and_then(|bytes| wire::decode_draft(bytes).ok())
    }

    /// The transaction hash `auto` mode reports for `request`.
    pub fn expected_hash(request: &[u8]) -> [u8; 32] {
        *blake3::hash(request).as_bytes()
    }

    fn auto_receipt(request: &[u8]) -> Vec<u8> {
        let draft = match wire::decode_draft(request) {
            Ok(draft) => draft,
            Err(_) => return br#"{"error":"malformed request"}"#.to_vec(),
        };
        let hash = hex::encode(Self::expected_hash(request));
        let receipt = match draft.sign_mode() {
            SignMode::Sign => format!(r#"{{"mode":"signed","signed_tx_hash":"{}"}}"#, hash),
            mode => {
                let tag = match mode {
                    SignMode::Delegated => "delegated",
                    SignMode::Threshold => "threshold",
                    SignMode::Paymaster => "paymaster",
                    _ => "unsigned",
                };
                format!(r#"{{"mode":"{}","unsigned_tx_hash":"{}"}}"#, tag, hash)
            }
        };
        receipt.into_bytes()
    }
}

impl LedgerHost for MockHost {
    fn build(&mut self, request: &[u8], response: &mut [u8]) -> u32 {
        self.requests.push(request.to_vec());
        if self.status != StatusCode::Success.as_u32() {
            return self.status;
        }

        let receipt = match &self.reply {
            Reply::Fixed(bytes) => bytes.clone(),
            Reply::Auto => Self::auto_receipt(request),
        };
        let written = receipt.len().min(response.len());
        response[..written].copy_from_slice(&receipt[..written]);
        response[written..].fill(self.padding);
        self.status
    }
}
