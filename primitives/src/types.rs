//! Core type aliases and constants shared by the builder and the guest bindings.

use crate::error::DraftError;

/// Length of a transaction id in bytes.
pub const TX_ID_LEN: usize = 32;

/// 32-byte id of a prior transaction.
pub type TxId = [u8; TX_ID_LEN];

/// Default capacity of the response buffer handed to the host (4 KiB).
///
/// Large enough for any receipt the host currently produces. The host
/// does not report how much it wrote, so the buffer is never grown.
pub const DEFAULT_RESPONSE_CAPACITY: usize = 4096;

/// Reference to a prior output: `(transaction id, output index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub tx_id: TxId,
    pub index: u32,
}

impl OutPoint {
    pub fn new(tx_id: TxId, index: u32) -> Self {
        Self { tx_id, index }
    }

    /// Build an outpoint from an untyped byte slice.
    ///
    /// Returns `DraftError::InvalidTxIdLength` unless `tx_id` is exactly
    /// [`TX_ID_LEN`] bytes.
    pub fn from_slice(tx_id: &[u8], index: u32) -> Result<Self, DraftError> {
        let tx_id: TxId = tx_id
            .try_into()
            .map_err(|_| DraftError::InvalidTxIdLength {
                expected: TX_ID_LEN,
                got: tx_id.len(),
            })?;
        Ok(Self { tx_id, index })
    }
}
