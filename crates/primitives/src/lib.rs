//! # forktx-primitives
//!
//! Common types shared by the forktx crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod deserializer;

pub use alloy_primitives::{
    self, address, b256, hex, keccak256, Address, Bytes, Signature, B256, U256,
};
pub use constants::*;
