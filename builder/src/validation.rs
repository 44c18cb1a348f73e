//! Descriptor validation.
//!
//! Runs when a descriptor is added, never at serialization time, so a
//! malformed draft is caught before any host interaction.

use alloc::vec::Vec;
use tessera_primitives::{DraftError, Input, OutPoint};

/// Validate an outpoint given as untyped bytes.
///
/// The transaction id must be exactly 32 bytes.
pub fn validate_outpoint(tx_id: &[u8], index: u32) -> Result<OutPoint, DraftError> {
    OutPoint::from_slice(tx_id, index)
}

/// Validate and assemble an input descriptor.
pub fn validate_input(
    tx_id: &[u8],
    index: u32,
    reference_only: bool,
    proof: &[u8],
) -> Result<Input, DraftError> {
    let outpoint = validate_outpoint(tx_id, index)?;
    Ok(Input::new(outpoint, reference_only, Vec::from(proof)))
}
