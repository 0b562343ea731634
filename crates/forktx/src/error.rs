use gas::GasError;
use primitives::{Address, B256};
use specification::RulesError;
use thiserror::Error;
use transaction::{DecodeError, SignatureError};
use txtest_types::MalformedRecord;

/// Reasons a transaction is invalid under a fork.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Bytes are not a transaction.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The sender can not be recovered.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),
    /// The intrinsic gas can not be computed.
    #[error(transparent)]
    GasComputation(#[from] GasError),
    /// The gas limit does not cover the intrinsic gas.
    #[error("intrinsic gas too low: have {declared}, want {required}")]
    InsufficientGas {
        /// Intrinsic gas of the transaction.
        required: u64,
        /// Gas limit of the transaction.
        declared: u64,
    },
}

/// Ways a single fork disagrees with its expectation.
#[derive(Debug, Error)]
pub enum ForkErrorKind {
    /// Validation failed but success was expected.
    #[error("unexpected error: {0}")]
    UnexpectedError(ValidationError),
    /// Validation succeeded but a failure was expected.
    #[error("expected error {expected:?}, got none")]
    ExpectedErrorGotNone {
        /// Expected exception.
        expected: String,
    },
    /// Transaction hash differs.
    #[error("hash mismatch: got {got}, want {expected}")]
    HashMismatch {
        /// Computed value.
        got: B256,
        /// Expected value.
        expected: B256,
    },
    /// Recovered sender differs.
    #[error("sender mismatch: got {got}, want {expected}")]
    SenderMismatch {
        /// Computed value.
        got: Address,
        /// Expected value.
        expected: Address,
    },
    /// Intrinsic gas differs.
    #[error("intrinsic gas mismatch: got {got}, want {expected}")]
    IntrinsicGasMismatch {
        /// Computed value.
        got: u64,
        /// Expected value.
        expected: u64,
    },
}

/// A failed test record.
#[derive(Debug, Error)]
pub enum TestError {
    /// The record breaks the fixture format.
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
    /// A checked fork has no rule set.
    #[error(transparent)]
    Rules(#[from] RulesError),
    /// A fork disagrees with its expectation.
    #[error("{fork}: {kind}")]
    Fork {
        /// Name of the fork.
        fork: &'static str,
        /// How it disagrees.
        kind: ForkErrorKind,
    },
}

impl TestError {
    /// Returns the fork the record failed under, if the failure is fork specific.
    pub fn fork(&self) -> Option<&'static str> {
        match self {
            Self::Fork { fork, .. } => Some(fork),
            _ => None,
        }
    }
}
