//! # forktx-txtest-types
//!
//! Data model of transaction test fixtures: a raw transaction and, per fork, the expected
//! sender, hash and intrinsic gas or an expected failure.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod outcome;
mod test;
mod test_suite;

pub use error::*;
pub use outcome::*;
pub use test::*;
pub use test_suite::*;
