//! Host function imports.
//!
//! All host functions are imported under the `tessera_host` WASM module.
//! Pointers are offsets into the guest's linear memory; every buffer is
//! passed as a pointer/length pair.

#[link(wasm_import_module = "tessera_host")]
extern "C" {
    // ── Transaction building ──

    /// Resolve and build the serialized draft at `[request_ptr, request_ptr + request_len)`.
    ///
    /// The host writes a JSON receipt into `[response_ptr, response_ptr + response_cap)`
    /// and leaves the unused tail as padding. It does not report how many
    /// bytes it wrote. Returns 0 on success, a host status code otherwise.
    pub fn build(
        request_ptr: u32,
        request_len: u32,
        response_ptr: u32,
        response_cap: u32,
    ) -> u32;

    // ── Logs ──

    /// Write a debug log line. Not consensus-critical.
    pub fn log(level: u32, msg_ptr: u32, msg_len: u32) -> u32;
}
