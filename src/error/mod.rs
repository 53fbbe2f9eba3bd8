//! Error types and handling for stalepkg
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Every pipeline stage has its own group of variants, and each diagnostic
//! code names the stage that failed:
//! - [`config`]: settings file errors
//! - [`history`]: merge log fetching and parsing errors
//! - [`db`]: installed package database errors

pub mod config;
pub mod db;
pub mod history;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stalepkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum StaleError {
    // Argument errors
    #[error("Months value {months} is out of range")]
    #[diagnostic(
        code(stalepkg::args::months_out_of_range),
        help("The cutoff date must stay within the supported calendar range")
    )]
    MonthsOutOfRange { months: i64 },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(stalepkg::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(stalepkg::config::parse_failed),
        help("Valid keys are: months, history_command, db_path")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(stalepkg::config::invalid))]
    ConfigInvalid { message: String },

    // History errors
    #[error("Failed to run merge log command '{command}': {reason}")]
    #[diagnostic(
        code(stalepkg::history::command_failed),
        help("Install app-portage/portage-utils, or pass --history-cmd / --history-file")
    )]
    HistoryCommandFailed { command: String, reason: String },

    #[error("Merge log command '{command}' exited with {status}: {stderr}")]
    #[diagnostic(code(stalepkg::history::command_exit))]
    HistoryCommandExit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to read merge log from {path}: {reason}")]
    #[diagnostic(code(stalepkg::history::read_failed))]
    HistoryReadFailed { path: String, reason: String },

    // Parse errors
    #[error("Invalid merge timestamp on line {line}: '{text}': {reason}")]
    #[diagnostic(
        code(stalepkg::parse::timestamp),
        help("Expected '<Weekday> <Month> <Day> <HH:MM:SS> <Year>' or 'YYYY-MM-DDTHH:MM:SS'")
    )]
    TimestampParse {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("Invalid package atom on line {line}: '{atom}': {reason}")]
    #[diagnostic(code(stalepkg::parse::atom))]
    InvalidAtom {
        line: usize,
        atom: String,
        reason: String,
    },

    // Database errors
    #[error("Failed to open package database at {path}: {reason}")]
    #[diagnostic(
        code(stalepkg::db::open_failed),
        help("Point --db at the installed package database (usually /var/db/pkg)")
    )]
    DatabaseOpen { path: String, reason: String },

    #[error("Failed to read package database entry {path}: {reason}")]
    #[diagnostic(code(stalepkg::db::read_failed))]
    DatabaseRead { path: String, reason: String },

    // Output errors
    #[error("Failed to write report: {message}")]
    #[diagnostic(code(stalepkg::output::write_failed))]
    OutputFailed { message: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StaleError>;
