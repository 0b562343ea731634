//! # forktx-gas
//!
//! Intrinsic gas: the gas a transaction must declare before it executes a single instruction.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod calc;
pub mod constants;

pub use calc::{intrinsic_gas, GasError, IntrinsicGasInput};
