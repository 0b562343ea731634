//! # forktx
//!
//! Checks a raw transaction against the outcome a test record expects under each hardfork.
//!
//! For every [`ForkCase`] with an expectation the runner resolves the fork's [`Rules`], validates
//! the transaction ([`validate`]) and compares the result with the expectation ([`reconcile`]).
//! The first fork that disagrees fails the record.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod forks;
pub mod reconcile;
pub mod runner;
pub mod validator;

pub use error::{ForkErrorKind, TestError, ValidationError};
pub use forks::{ForkCase, FORK_CASES};
pub use reconcile::reconcile;
pub use runner::{run, run_cases};
pub use validator::{validate, ValidatedTx};

pub use specification::{ChainConfig, Rules};
pub use transaction::SignatureScheme;
pub use txtest_types::{ExpectedOutcome, MalformedRecord, TestSuite, TransactionTest};
