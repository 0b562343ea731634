mod runner;

pub use runner::{TestError as Error, TestErrorKind};

use clap::{ArgAction, Parser};
use forktx::ChainConfig;
use runner::{find_all_json_tests, run, TestError};
use std::path::PathBuf;

/// `txtest` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path to folder or file containing the tests
    ///
    /// If multiple paths are specified they will be run in sequence.
    ///
    /// Folders will be searched recursively for files with the extension `.json`.
    #[arg(required = true, num_args = 1..)]
    paths: Vec<PathBuf>,
    /// Chain configuration used to resolve fork rules, bare or inside a genesis file
    ///
    /// Defaults to Ethereum mainnet.
    #[arg(short = 'c', long)]
    chain_config: Option<PathBuf>,
    /// Run tests in a single thread
    #[arg(short = 's', long)]
    single_thread: bool,
    /// Output outcome of every test in JSON format
    #[arg(short = 'o', long)]
    json_outcome: bool,
    /// Keep going after a test failure
    #[arg(long, alias = "no-fail-fast")]
    keep_going: bool,
    /// Increase log verbosity, repeat for more
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cmd {
    /// Runs `txtest` command.
    pub fn run(&self) -> Result<(), TestError> {
        let config = self.chain_config()?;

        for path in &self.paths {
            if !path.exists() {
                return Err(TestError {
                    name: "Path validation".to_string(),
                    path: path.display().to_string(),
                    kind: TestErrorKind::InvalidPath,
                });
            }

            let test_files = find_all_json_tests(path);

            if test_files.is_empty() {
                return Err(TestError {
                    name: "Path validation".to_string(),
                    path: path.display().to_string(),
                    kind: TestErrorKind::NoJsonFiles,
                });
            }

            println!("\nRunning tests in {}...", path.display());
            run(
                test_files,
                config,
                self.single_thread,
                self.json_outcome,
                self.keep_going,
            )?;
        }
        Ok(())
    }

    fn chain_config(&self) -> Result<ChainConfig, TestError> {
        let Some(path) = &self.chain_config else {
            return Ok(ChainConfig::mainnet());
        };
        let error = |kind: TestErrorKind| TestError {
            name: "Chain config".to_string(),
            path: path.display().to_string(),
            kind,
        };
        let json = std::fs::read_to_string(path).map_err(|e| error(e.into()))?;
        ChainConfig::from_json(&json).map_err(|e| error(e.into()))
    }
}
