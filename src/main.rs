//! stalepkg - stale package report
//!
//! Cross-references the package merge history with the installed package
//! database and lists installed packages that have not been re-merged
//! within a given number of months.

use clap::Parser;
use miette::Diagnostic;

mod audit;
mod cli;
mod commands;
mod config;
mod error;
mod history;
mod logging;
mod portage;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => commands::audit::run(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
