use anyhow::Result;
use clap::Parser;
use max_lines::cli::{Cli, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    cli.run()
}
