//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::audit::OutputFormat;

/// stalepkg - find installed packages that have not been re-merged lately
#[derive(Parser, Debug)]
#[command(
    name = "stalepkg",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Report installed packages that have not been re-merged recently",
    long_about = "stalepkg cross-references the merge history (qlop -l) with the installed \
                  package database and prints every installed package whose most recent \
                  merge is older than the given number of months, oldest first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  stalepkg                               \x1b[90m# Not merged in the last 12 months\x1b[0m\n   \
                  stalepkg 24                            \x1b[90m# Not merged in the last 2 years\x1b[0m\n   \
                  stalepkg --dates 6                     \x1b[90m# Include last merge dates\x1b[0m\n   \
                  qlop -l | stalepkg --history-file -    \x1b[90m# Read the merge log from stdin\x1b[0m\n   \
                  stalepkg 6 | xargs emerge -1av         \x1b[90m# Re-merge stale packages\x1b[0m\n"
)]
pub struct Cli {
    /// Report packages last merged more than this many months ago [default: 12]
    #[arg(value_name = "MONTHS", allow_negative_numbers = true)]
    pub months: Option<i64>,

    /// Merge log command line
    #[arg(long, value_name = "CMD", env = "STALEPKG_HISTORY_CMD")]
    pub history_cmd: Option<String>,

    /// Read the merge log from a file ("-" for standard input); takes
    /// precedence over --history-cmd
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Installed package database directory [default: /var/db/pkg]
    #[arg(long, value_name = "PATH", env = "STALEPKG_DB")]
    pub db: Option<PathBuf>,

    /// Settings file [default: <config dir>/stalepkg/config.yaml]
    #[arg(long, value_name = "PATH", env = "STALEPKG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the last merge date next to each package
    #[arg(long)]
    pub dates: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
