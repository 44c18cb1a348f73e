//! `tessera-guest` — WASM guest bindings for the Tessera transaction builder.
//!
//! Contract code links this crate to reach the host:
//!
//! - [`begin`] — start a transaction draft
//! - [`finalize`] — submit it through the `tessera_host::build` import and
//!   return `(success, tx hash, status)`
//! - [`init_logging`] — route `log` records to `tessera_host::log`
//!
//! Host functions are imported under the `tessera_host` WASM module and are
//! only linked on `wasm32` targets; on other targets only the logger is
//! available, and contracts test against `tessera_builder::MockHost`.
//!
//! **Determinism:** nothing here reads clocks, randomness, or global state.
//! The `wasm32-unknown-unknown` standard library provides the allocator
//! and panic handler.

mod logger;

#[cfg(target_arch = "wasm32")]
mod imports;
#[cfg(target_arch = "wasm32")]
mod host_bridge;

pub use logger::{init_logging, level_code, HostLogger};
pub use tessera_builder::{BuilderConfig, FinalizeError, Outcome, TxBuilder};

#[cfg(target_arch = "wasm32")]
pub use host_bridge::WasmHostBridge;

/// Start an empty transaction draft.
pub fn begin() -> TxBuilder {
    TxBuilder::begin()
}

/// Submit `builder` to the host and flatten the result.
///
/// A builder that recorded a validation error returns
/// `(false, None, EXECUTION_FAILED)` without calling the host.
#[cfg(target_arch = "wasm32")]
pub fn finalize(builder: TxBuilder) -> Outcome {
    builder.finalize_outcome(&mut WasmHostBridge::new())
}
