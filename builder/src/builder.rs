//! Fail-fast transaction builder.
//!
//! `TxBuilder` accumulates descriptors into a [`Draft`] and owns the single
//! terminal step, [`TxBuilder::finalize`]:
//!
//! 1. Reject a draft that recorded a validation error (no host call)
//! 2. Serialize the draft into the request buffer
//! 3. Allocate the fixed-capacity response buffer
//! 4. Call the host
//! 5. Surface a non-zero host status verbatim
//! 6. Decode the receipt into a transaction hash
//!
//! The builder holds `Result<Draft, DraftError>`. The first failed
//! addition replaces the draft with its error and every later addition is
//! a no-op, so a chain only needs to be checked once, at the end.
//! Finalization consumes the builder; a draft is submitted at most once.
//! Nothing here retries.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, warn};
use tessera_primitives::{
    wire, DraftError, Draft, Intent, Output, ReceiptError, SignMode, StatusCode, TxHash,
    decode_receipt,
};
use crate::config::BuilderConfig;
use crate::host::LedgerHost;
use crate::validation::validate_input;

/// Why a finalize call produced no transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinalizeError {
    /// An addition failed validation; the host was never called.
    #[error("draft rejected before submission: {0}")]
    Invalid(#[from] DraftError),

    /// The draft could not be serialized.
    #[error("failed to encode draft: {0}")]
    Encoding(String),

    /// Guest memory for a boundary buffer could not be obtained.
    #[error("failed to allocate {0} bytes of guest memory")]
    Allocation(usize),

    /// The host returned a non-zero status code.
    #[error("host returned status {0}")]
    Host(u32),

    /// The receipt could not be decoded.
    #[error("receipt decode failed: {0}")]
    Receipt(#[from] ReceiptError),
}

impl FinalizeError {
    /// Status code reported to contract code.
    ///
    /// Host status codes pass through unchanged; every guest-side failure
    /// collapses to `EXECUTION_FAILED`.
    pub fn status(&self) -> u32 {
        match self {
            Self::Host(code) => *code,
            _ => StatusCode::ExecutionFailed.as_u32(),
        }
    }
}

/// Flat `(success, hash, status)` result of a finalize call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub tx_hash: Option<Vec<u8>>,
    pub status: u32,
}

impl From<Result<TxHash, FinalizeError>> for Outcome {
    fn from(result: Result<TxHash, FinalizeError>) -> Self {
        match result {
            Ok(hash) => Self {
                success: true,
                tx_hash: Some(hash.bytes),
                status: StatusCode::Success.as_u32(),
            },
            Err(err) => Self {
                success: false,
                tx_hash: None,
                status: err.status(),
            },
        }
    }
}

/// Fluent accumulator over a single [`Draft`].
#[derive(Debug)]
pub struct TxBuilder {
    state: Result<Draft, DraftError>,
    config: BuilderConfig,
}

impl Default for TxBuilder {
    fn default() -> Self {
        Self::begin()
    }
}

impl TxBuilder {
    /// Start an empty draft with the default configuration.
    pub fn begin() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Start an empty draft with `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            state: Ok(Draft::new(config.sign_mode)),
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The draft built so far, unless an addition failed.
    pub fn draft(&self) -> Option<&Draft> {
        self.state.as_ref().ok()
    }

    /// The recorded validation error, if any.
    pub fn error(&self) -> Option<&DraftError> {
        self.state.as_ref().err()
    }

    /// Give up the builder without submitting.
    pub fn into_draft(self) -> Result<Draft, DraftError> {
        self.state
    }

    /// Apply `step` to the draft unless an error is already recorded.
    fn apply<F>(mut self, step: F) -> Self
    where
        F: FnOnce(&mut Draft) -> Result<(), DraftError>,
    {
        if let Ok(draft) = self.state.as_mut() {
            if let Err(err) = step(draft) {
                debug!("draft invalidated: {}", err);
                self.state = Err(err);
            }
        }
        self
    }

    pub fn sign_mode(self, sign_mode: SignMode) -> Self {
        self.apply(|draft| {
            draft.set_sign_mode(sign_mode);
            Ok(())
        })
    }

    /// Send `amount` of `token_id` to `recipient`.
    pub fn add_asset_output(
        self,
        recipient: impl AsRef<[u8]>,
        token_id: impl AsRef<[u8]>,
        amount: u128,
    ) -> Self {
        self.apply(|draft| {
            draft.push_output(Output::Asset {
                to: recipient.as_ref().to_vec(),
                token_id: token_id.as_ref().to_vec(),
                amount,
            });
            Ok(())
        })
    }

    /// Commit `version` of a contract state along with its execution hash.
    pub fn add_state_output(
        self,
        state_id: impl AsRef<[u8]>,
        version: u64,
        exec_hash: impl AsRef<[u8]>,
    ) -> Self {
        self.apply(|draft| {
            draft.push_output(Output::State {
                state_id: state_id.as_ref().to_vec(),
                version,
                exec_hash: exec_hash.as_ref().to_vec(),
            });
            Ok(())
        })
    }

    pub fn add_resource_output(self, resource: impl AsRef<[u8]>) -> Self {
        self.apply(|draft| {
            draft.push_output(Output::Resource {
                resource: resource.as_ref().to_vec(),
            });
            Ok(())
        })
    }

    /// Reference the output `(tx_id, index)`.
    ///
    /// `tx_id` must be exactly 32 bytes; anything else records
    /// `DraftError::InvalidTxIdLength` and poisons the builder.
    pub fn add_input(
        self,
        tx_id: impl AsRef<[u8]>,
        index: u32,
        reference_only: bool,
        proof: impl AsRef<[u8]>,
    ) -> Self {
        self.apply(|draft| {
            let input = validate_input(tx_id.as_ref(), index, reference_only, proof.as_ref())?;
            draft.push_input(input);
            Ok(())
        })
    }

    /// Ask the host to move `amount` of `token_id` from `from` to `to`.
    pub fn transfer(
        self,
        from: impl AsRef<[u8]>,
        to: impl AsRef<[u8]>,
        token_id: impl AsRef<[u8]>,
        amount: u128,
    ) -> Self {
        self.apply(|draft| {
            draft.push_intent(Intent::Transfer {
                from: from.as_ref().to_vec(),
                to: to.as_ref().to_vec(),
                token_id: token_id.as_ref().to_vec(),
                amount,
            });
            Ok(())
        })
    }

    /// Ask the host to stake `amount` from `staker` with `validator`.
    pub fn stake(
        self,
        staker: impl AsRef<[u8]>,
        amount: u128,
        validator: impl AsRef<[u8]>,
    ) -> Self {
        self.apply(|draft| {
            draft.push_intent(Intent::Stake {
                staker: staker.as_ref().to_vec(),
                amount,
                validator: validator.as_ref().to_vec(),
            });
            Ok(())
        })
    }

    /// Submit the draft to `host` and decode its receipt.
    pub fn finalize<H>(self, host: &mut H) -> Result<TxHash, FinalizeError>
    where
        H: LedgerHost + ?Sized,
    {
        let draft = self.state?;

        let request = wire::encode_draft(&draft)
            .map_err(|err| FinalizeError::Encoding(err.to_string()))?;
        let mut response = alloc_buffer(self.config.response_capacity)?;

        debug!(
            "submitting draft: mode={} inputs={} outputs={} intents={} request_bytes={}",
            draft.sign_mode().as_str(),
            draft.inputs().len(),
            draft.outputs().len(),
            draft.intents().len(),
            request.len(),
        );

        let status = host.build(&request, &mut response);
        if status != StatusCode::Success.as_u32() {
            warn!("host build failed with status {}", status);
            return Err(FinalizeError::Host(status));
        }

        let hash = decode_receipt(&response).map_err(|err| {
            warn!("receipt rejected: {}", err);
            FinalizeError::from(err)
        })?;
        debug!("draft accepted: {} hash bytes ({:?})", hash.bytes.len(), hash.kind);
        Ok(hash)
    }

    /// [`finalize`](Self::finalize), flattened into an [`Outcome`].
    pub fn finalize_outcome<H>(self, host: &mut H) -> Outcome
    where
        H: LedgerHost + ?Sized,
    {
        self.finalize(host).into()
    }
}

/// Allocate a zeroed boundary buffer of exactly `len` bytes.
///
/// Allocation failure is reported instead of aborting the guest.
fn alloc_buffer(len: usize) -> Result<Vec<u8>, FinalizeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FinalizeError::Allocation(len))?;
    buf.resize(len, 0);
    Ok(buf)
}
