//! WASM host bridge — implements `LedgerHost` by calling the imported `build`.
//!
//! The request and response are guest-owned `Vec`s, so their addresses are
//! valid linear-memory offsets for the duration of the call. The host
//! borrows both buffers only until `build` returns.

use tessera_builder::LedgerHost;
use crate::imports;

/// Bridges `LedgerHost` to the WASM imported host function.
#[derive(Debug, Default, Clone, Copy)]
pub struct WasmHostBridge;

impl WasmHostBridge {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerHost for WasmHostBridge {
    fn build(&mut self, request: &[u8], response: &mut [u8]) -> u32 {
        // wasm32 pointers and lengths fit in u32.
        unsafe {
            imports::build(
                request.as_ptr() as u32,
                request.len() as u32,
                response.as_mut_ptr() as u32,
                response.len() as u32,
            )
        }
    }
}
