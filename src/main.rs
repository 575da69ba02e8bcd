use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod services;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {e:#}");
    }
    commands::handle_table(&cli)
}
