//! # txme
//!
//! Command line runner for Ethereum transaction tests.
pub mod cmd;
pub mod logging;
