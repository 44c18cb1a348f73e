//! Builder configuration.

use tessera_primitives::{SignMode, DEFAULT_RESPONSE_CAPACITY};

/// Configuration for a [`TxBuilder`](crate::TxBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Capacity of the receipt buffer handed to the host, in bytes.
    /// Receipts longer than this are truncated by the host and fail to decode.
    pub response_capacity: usize,

    /// Sign mode a new draft starts with.
    pub sign_mode: SignMode,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            response_capacity: DEFAULT_RESPONSE_CAPACITY, // 4 KiB
            sign_mode: SignMode::DeferSign,
        }
    }
}
