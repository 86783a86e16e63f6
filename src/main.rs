mod cli;
mod config;
mod convert;
mod dates_cmd;
mod export_cmd;
mod logging;
mod plan;
mod table_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dates(args) => dates_cmd::run(args),
        Command::Table(args) => table_cmd::run(args),
        Command::Export(args) => export_cmd::run(args),
    }
}
