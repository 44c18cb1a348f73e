//! Status codes and error types for draft construction and receipt decoding.

use alloc::string::String;
use core::fmt;

/// Status codes surfaced to contract code by a finalize call.
///
/// Codes reported by the host are passed through verbatim and are not
/// limited to these variants; `ExecutionFailed` is the generic code for
/// every failure detected on the guest side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StatusCode {
    Success = 0,
    ExecutionFailed = 1,
}

impl StatusCode {
    /// Convert from a raw `u32` status code.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::ExecutionFailed),
            _ => None,
        }
    }

    /// Return the `u32` representation of this status code.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::ExecutionFailed => write!(f, "EXECUTION_FAILED"),
        }
    }
}

/// A descriptor was rejected when it was added to a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Outpoint transaction id has the wrong length.
    #[error("transaction id must be {expected} bytes, got {got}")]
    InvalidTxIdLength { expected: usize, got: usize },
}

/// The host's receipt could not be turned into a transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptError {
    /// No closing `}` before the trailing padding of the response buffer.
    #[error("response buffer holds no JSON payload")]
    MissingExtent,

    /// The recovered payload is not a JSON object.
    #[error("malformed receipt: {0}")]
    Malformed(String),

    /// The host reported an error. The raw message is preserved.
    #[error("host rejected draft: {0}")]
    Rejected(String),

    /// Neither `unsigned_tx_hash` nor `signed_tx_hash` is present.
    #[error("receipt carries no transaction hash")]
    MissingHash,

    /// The hash field is not valid hex.
    #[error("invalid hex in transaction hash: {0}")]
    InvalidHex(String),
}
