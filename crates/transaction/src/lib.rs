//! # forktx-transaction
//!
//! Decoding of raw transactions and recovery of their sender under the signature scheme of a fork.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod decode;
pub mod recover;
pub mod signer;

pub use alloy_consensus::{TxEnvelope, TxType};
pub use decode::{DecodeError, DecodedTransaction};
pub use signer::{SignatureError, SignatureScheme, Signer};
