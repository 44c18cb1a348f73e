//! `tessera-builder` — guest-side transaction builder.
//!
//! This crate turns a sequence of descriptor additions into one host
//! build request and decodes the host's answer:
//! `begin → add* → finalize(host) → (success, tx hash, status)`
//!
//! ## Architecture
//!
//! - [`host::LedgerHost`] — trait abstracting the host build call
//! - [`host::MockHost`] — in-memory implementation for testing
//! - [`validation`] — descriptor validation at insertion time
//! - [`config::BuilderConfig`] — response capacity and initial sign mode
//! - [`builder::TxBuilder`] — fail-fast accumulator and `finalize`
//!
//! Single-threaded and synchronous: the host call blocks until the receipt
//! is written, and there is no timeout or cancellation.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod host;
pub mod config;
pub mod validation;
pub mod builder;

// Re-export key types for convenience
pub use builder::{FinalizeError, Outcome, TxBuilder};
pub use config::BuilderConfig;
pub use host::{LedgerHost, MockHost};
