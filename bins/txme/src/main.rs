//! `txme` command line entry point.
use clap::Parser;
use color_eyre::eyre::Result;
use txme::cmd::MainCmd;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cmd = MainCmd::parse();
    txme::logging::init(cmd.verbosity());
    cmd.run()?;

    Ok(())
}
