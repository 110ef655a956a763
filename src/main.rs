//! Binary entry point for the `codeforge` setup tool.
use std::process::ExitCode;

use clap::Parser as _;

use codeforge_cli::cli::Cli;
use codeforge_cli::{commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, "setup");
    let log = logging::Logger::new("setup");

    if let Err(e) = commands::run(&args, &log) {
        log.error(&format!("{e:#}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
