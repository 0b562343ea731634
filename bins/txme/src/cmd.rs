//! Subcommands.
pub mod txtest;

use clap::Parser;

/// `txme` subcommands.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Run transaction tests across hardforks
    Txtest(txtest::Cmd),
}

/// Error returned by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `txtest` failed.
    #[error(transparent)]
    Txtest(#[from] txtest::Error),
}

impl MainCmd {
    /// Number of `-v` flags given.
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Txtest(cmd) => cmd.verbose,
        }
    }

    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Txtest(cmd) => cmd.run().map_err(Into::into),
        }
    }
}
