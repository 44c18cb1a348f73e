//! Receipt decoding.
//!
//! The host writes its JSON receipt into a fixed-capacity buffer owned by
//! the guest and does not report how many bytes it wrote. Decoding is
//! therefore two-staged:
//!
//! 1. **Extent recovery**: scan backward over trailing padding (NUL or
//!    ASCII whitespace) to the last `}`; the payload is everything up to
//!    and including it.
//! 2. **Field extraction**: an `error` field fails the receipt outright.
//!    Otherwise `unsigned_tx_hash` is preferred over `signed_tx_hash`, and
//!    the chosen hex string is decoded to raw bytes.
//!
//! The brace scan only works because receipts always end in `}`. A host
//! ABI that returned the written length would make it unnecessary.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Deserialize;
use serde_json::Value;
use crate::encoding::decode_hex;
use crate::error::ReceiptError;

/// Signing mode reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptMode {
    Unsigned,
    Delegated,
    Threshold,
    Paymaster,
    Signed,
}

impl ReceiptMode {
    /// Parse the receipt's `mode` tag. Unknown tags yield `None`.
    pub fn from_wire(tag: &str) -> Option<Self> {
        match tag {
            "unsigned" => Some(Self::Unsigned),
            "delegated" => Some(Self::Delegated),
            "threshold" => Some(Self::Threshold),
            "paymaster" => Some(Self::Paymaster),
            "signed" => Some(Self::Signed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Delegated => "delegated",
            Self::Threshold => "threshold",
            Self::Paymaster => "paymaster",
            Self::Signed => "signed",
        }
    }
}

/// Which receipt field the hash came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// `unsigned_tx_hash`: deferred, delegated, threshold and paymaster modes.
    Unsigned,
    /// `signed_tx_hash`: immediate signing.
    Signed,
}

/// A successfully decoded receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxHash {
    pub bytes: Vec<u8>,
    pub kind: HashKind,
    /// The `mode` tag, if the host sent a recognised one.
    pub mode: Option<ReceiptMode>,
}

#[derive(Deserialize)]
struct RawReceipt {
    #[serde(default)]
    mode: Option<Value>,
    #[serde(default)]
    unsigned_tx_hash: Option<Value>,
    #[serde(default)]
    signed_tx_hash: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

fn is_padding(byte: u8) -> bool {
    matches!(byte, 0 | b' ' | b'\t' | b'\n' | b'\r')
}

/// Locate the end of the JSON payload in a padded response buffer.
///
/// Returns the index one past the last `}`, or `None` if the buffer is all
/// padding or the last non-padding byte is not `}`.
pub fn find_json_end(buf: &[u8]) -> Option<usize> {
    let last = buf.iter().rposition(|&b| !is_padding(b))?;
    (buf[last] == b'}').then_some(last + 1)
}

/// A non-empty string value, if `value` is one.
fn non_empty_str(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Host error message, if the receipt reports one.
///
/// `null` and `""` count as absent. Any other value is an error; non-string
/// values are carried in their JSON form.
fn host_error(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Decode a receipt from the full response buffer.
pub fn decode_receipt(buf: &[u8]) -> Result<TxHash, ReceiptError> {
    let end = find_json_end(buf).ok_or(ReceiptError::MissingExtent)?;
    let raw: RawReceipt = serde_json::from_slice(&buf[..end])
        .map_err(|err| ReceiptError::Malformed(err.to_string()))?;

    if let Some(message) = host_error(&raw.error) {
        return Err(ReceiptError::Rejected(message));
    }

    let (hex, kind) = if let Some(hex) = non_empty_str(&raw.unsigned_tx_hash) {
        (hex, HashKind::Unsigned)
    } else if let Some(hex) = non_empty_str(&raw.signed_tx_hash) {
        (hex, HashKind::Signed)
    } else {
        return Err(ReceiptError::MissingHash);
    };

    let mode = match &raw.mode {
        Some(Value::String(tag)) => ReceiptMode::from_wire(tag),
        _ => None,
    };

    Ok(TxHash {
        bytes: decode_hex(hex)?,
        kind,
        mode,
    })
}
