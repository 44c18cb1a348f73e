//! Draft ⇄ host request encoding.
//!
//! The request is a single compact JSON object:
//!
//! ```text
//! {"sign_mode":"defer_sign",
//!  "inputs":[...],            // only when the draft has inputs
//!  "outputs":[{"type":"asset","to":"<b64>","token_id":"<b64>","amount":"<dec>"}, ...],
//!  "intents":[{"type":"transfer","from":"<b64>", ...}, ...]}
//! ```
//!
//! Key order inside objects follows field declaration order and is stable,
//! though the host only relies on array order. Every descriptor object
//! starts with its `type` discriminator.

use alloc::vec::Vec;
use crate::draft::Draft;

/// Encode a draft into request bytes.
pub fn encode_draft(draft: &Draft) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(draft)
}

/// Decode request bytes back into a draft.
///
/// The guest never needs this; hosts and test doubles do.
pub fn decode_draft(data: &[u8]) -> Result<Draft, serde_json::Error> {
    serde_json::from_slice(data)
}
