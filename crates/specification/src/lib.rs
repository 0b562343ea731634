//! # forktx-specification
//!
//! Hardfork identifiers, chain configuration and rule resolution.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activation;
pub mod chain_config;
pub mod hardfork;
pub mod rules;

pub use activation::{resolve_rules, Activation, ActivationKind, RulesError};
pub use chain_config::ChainConfig;
pub use hardfork::{Fork, UnknownFork};
pub use rules::Rules;
