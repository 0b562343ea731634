use thiserror::Error;

/// A test record that breaks the structural rules of the fixture format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// The raw transaction is missing.
    #[error("missing txbytes")]
    MissingTxBytes,
    /// A fork expects neither success nor failure.
    #[error("invalid {fork}: missing hash and exception")]
    MissingHashAndException {
        /// Fork key of the expectation.
        fork: String,
    },
    /// A fork expects both success and failure.
    #[error("invalid {fork}: both hash and exception given")]
    HashAndException {
        /// Fork key of the expectation.
        fork: String,
    },
    /// A fork expects success without naming the sender.
    #[error("invalid {fork}: missing sender")]
    MissingSender {
        /// Fork key of the expectation.
        fork: String,
    },
}
