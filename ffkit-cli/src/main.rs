// ffkit-cli/src/main.rs
//
// Entry point: set up logging, parse arguments, dispatch the chosen
// operation, and map any failure to a non-zero exit code.

use std::process;

use clap::Parser;
use ffkit_cli::{cli, commands, logging};
use owo_colors::OwoColorize;

fn main() {
    logging::init();

    let parsed = cli::Cli::parse();
    if let Err(e) = commands::run(parsed.command, parsed.overwrite) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
