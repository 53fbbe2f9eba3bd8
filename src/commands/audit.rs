//! Audit command implementation
//!
//! Resolves options, opens the package database, runs the audit and prints
//! the stale packages.

use std::io::ErrorKind;

use chrono::Local;
use tracing::debug;

use crate::audit::{self, OutputFormat, StaleEntry};
use crate::cli::Cli;
use crate::config::{AuditConfig, HistorySpec, Settings};
use crate::error::{Result, StaleError};
use crate::history::{CommandSource, FileSource, HistorySource, StdinSource};
use crate::portage::VarDb;

/// Run the audit command
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::discover(cli.config.as_deref())?;
    let config = AuditConfig::resolve(cli, settings)?;
    debug!(?config, "Resolved options");

    let source = history_source(&config.history);
    let db = VarDb::open(&config.db_path)?;
    debug!(path = %db.path().display(), packages = db.len(), "Opened package database");

    let now = Local::now().naive_local();
    let entries = audit::run_audit(source.as_ref(), &db, config.months, now)?;

    print_report(&entries, cli.format, cli.dates)
}

fn history_source(spec: &HistorySpec) -> Box<dyn HistorySource> {
    match spec {
        HistorySpec::Command { program, args } => {
            Box::new(CommandSource::new(program.clone(), args.clone()))
        }
        HistorySpec::File(path) => Box::new(FileSource::new(path)),
        HistorySpec::Stdin => Box::new(StdinSource),
    }
}

/// Print the report to stdout. A closed pipe (e.g. `| head`) ends output
/// quietly.
fn print_report(entries: &[StaleEntry], format: OutputFormat, dates: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match audit::report::render(entries, format, dates, &mut out) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(StaleError::OutputFailed {
            message: e.to_string(),
        }),
    }
}
