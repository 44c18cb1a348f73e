//! The in-flight transaction draft.
//!
//! A `Draft` is an ordered aggregate of descriptors. Order is positional:
//! the host assigns output indices by position, so every sequence keeps
//! exact insertion order all the way into the wire message.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use crate::descriptors::{Input, Intent, Output};

/// How the host should treat signing of the resolved transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignMode {
    /// Host signs immediately and returns `signed_tx_hash`.
    Sign,
    /// Host returns an unsigned transaction for later signing.
    #[default]
    DeferSign,
    Delegated,
    Threshold,
    Paymaster,
}

impl SignMode {
    /// Wire tag for this sign mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sign => "sign",
            Self::DeferSign => "defer_sign",
            Self::Delegated => "delegated",
            Self::Threshold => "threshold",
            Self::Paymaster => "paymaster",
        }
    }
}

/// A pending transaction: inputs, outputs and intents in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    sign_mode: SignMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    inputs: Vec<Input>,
    #[serde(default)]
    outputs: Vec<Output>,
    #[serde(default)]
    intents: Vec<Intent>,
}

impl Draft {
    pub fn new(sign_mode: SignMode) -> Self {
        Self {
            sign_mode,
            ..Self::default()
        }
    }

    pub fn sign_mode(&self) -> SignMode {
        self.sign_mode
    }

    pub fn set_sign_mode(&mut self, sign_mode: SignMode) {
        self.sign_mode = sign_mode;
    }

    pub fn push_input(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn push_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Total number of descriptors.
    pub fn len(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_default_sign_mode_is_defer() {
        assert_eq!(SignMode::default(), SignMode::DeferSign);
        assert_eq!(Draft::default().sign_mode(), SignMode::DeferSign);
        assert_eq!(SignMode::DeferSign.as_str(), "defer_sign");
    }

    #[test]
    fn test_push_keeps_order() {
        let mut draft = Draft::new(SignMode::Sign);
        assert!(draft.is_empty());
        draft.push_output(Output::Resource { resource: vec![1] });
        draft.push_output(Output::Resource { resource: vec![2] });
        draft.push_intent(Intent::Stake { staker: vec![3], amount: 5, validator: vec![4] });

        assert_eq!(draft.len(), 3);
        assert_eq!(draft.outputs()[0], Output::Resource { resource: vec![1] });
        assert_eq!(draft.outputs()[1], Output::Resource { resource: vec![2] });
        assert_eq!(draft.intents().len(), 1);
        assert!(draft.inputs().is_empty());
    }
}
