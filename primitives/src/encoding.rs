//! Field encodings used on the host boundary.
//!
//! - Binary fields travel as standard base64 (with `=` padding) strings.
//! - Amounts travel as decimal strings so no precision is lost in the host's
//!   JSON parser.
//! - Transaction hashes come back as hex.
//!
//! The `b64` and `decimal` modules are `#[serde(with = ...)]` adapters.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use crate::error::ReceiptError;

/// Serde adapter: bytes ⇄ base64 string.
pub mod b64 {
    use alloc::string::String;
    use alloc::vec::Vec;
    use ::base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    pub fn decode(text: &str) -> Result<Vec<u8>, ::base64::DecodeError> {
        STANDARD.decode(text)
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&encode(value.as_ref()))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: TryFrom<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let bytes = decode(&text).map_err(de::Error::custom)?;
        let len = bytes.len();
        T::try_from(bytes)
            .map_err(|_| de::Error::custom(alloc::format!("unexpected byte length {}", len)))
    }
}

/// Serde adapter: `u128` ⇄ decimal string.
pub mod decimal {
    use alloc::string::String;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(de::Error::custom("amount must be a decimal string"));
        }
        text.parse::<u128>().map_err(de::Error::custom)
    }
}

/// Decode a hex transaction hash.
///
/// Case-insensitive, with an optional `0x`/`0X` prefix. An odd-length string
/// is read as if it had one leading `0`. Any non-hex character is an error.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, ReceiptError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let result = if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        hex::decode(padded)
    } else {
        hex::decode(digits)
    };
    result.map_err(|err| ReceiptError::InvalidHex(err.to_string()))
}

/// Encode bytes as lowercase hex without a prefix.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
