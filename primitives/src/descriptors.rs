//! Draft descriptors: one input, one output, or one intent.
//!
//! Outputs are fully specified and opaque to the host. Intents are
//! declarative operations the host resolves with ledger state the guest
//! cannot see (which entries to spend, how much change to return).
//!
//! The `type` strings are part of the host protocol and must not change.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use crate::encoding::{b64, decimal};
use crate::types::{OutPoint, TxId};

/// Spend (or reference) a prior output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(with = "b64")]
    pub tx_id: TxId,
    pub index: u32,
    /// Proves the referenced output exists without spending it.
    pub reference_only: bool,
    /// Opaque unlocking proof.
    #[serde(with = "b64")]
    pub proof: Vec<u8>,
}

impl Input {
    pub fn new(outpoint: OutPoint, reference_only: bool, proof: Vec<u8>) -> Self {
        Self {
            tx_id: outpoint.tx_id,
            index: outpoint.index,
            reference_only,
            proof,
        }
    }

    pub fn outpoint(&self) -> OutPoint {
        OutPoint::new(self.tx_id, self.index)
    }
}

/// A fully specified ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    /// Fungible asset sent to a recipient.
    Asset {
        #[serde(with = "b64")]
        to: Vec<u8>,
        #[serde(with = "b64")]
        token_id: Vec<u8>,
        #[serde(with = "decimal")]
        amount: u128,
    },
    /// Contract state commitment.
    State {
        #[serde(with = "b64")]
        state_id: Vec<u8>,
        version: u64,
        #[serde(with = "b64")]
        exec_hash: Vec<u8>,
    },
    /// Opaque resource blob.
    Resource {
        #[serde(with = "b64")]
        resource: Vec<u8>,
    },
}

impl Output {
    /// Wire discriminator for this output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Asset { .. } => "asset",
            Self::State { .. } => "state",
            Self::Resource { .. } => "resource",
        }
    }
}

/// A host-resolved ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    Transfer {
        #[serde(with = "b64")]
        from: Vec<u8>,
        #[serde(with = "b64")]
        to: Vec<u8>,
        #[serde(with = "b64")]
        token_id: Vec<u8>,
        #[serde(with = "decimal")]
        amount: u128,
    },
    Stake {
        #[serde(with = "b64")]
        staker: Vec<u8>,
        #[serde(with = "decimal")]
        amount: u128,
        #[serde(with = "b64")]
        validator: Vec<u8>,
    },
}

impl Intent {
    /// Wire discriminator for this intent.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "transfer",
            Self::Stake { .. } => "stake",
        }
    }
}
