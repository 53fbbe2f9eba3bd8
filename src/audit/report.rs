//! Stale package report: cutoff computation, selection and rendering.

use std::io::Write;

use chrono::{Months, NaiveDateTime};
use clap::ValueEnum;
use console::Style;
use serde::Serialize;

use super::recency::PackageRecency;
use crate::error::{Result, StaleError};

/// Default age, in months, beyond which a package counts as stale
pub const DEFAULT_MONTHS: i64 = 12;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One package per line
    #[default]
    Text,
    /// JSON array of objects
    Json,
}

/// A package whose last merge predates the cutoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleEntry {
    pub package: String,
    pub last_merged: NaiveDateTime,
}

/// `now` moved back by `months` calendar months. The day of month is clamped
/// to the end of shorter months; negative values move forward.
pub fn cutoff(now: NaiveDateTime, months: i64) -> Result<NaiveDateTime> {
    let out_of_range = || StaleError::MonthsOutOfRange { months };
    let span = Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range())?);

    if months >= 0 {
        now.checked_sub_months(span)
    } else {
        now.checked_add_months(span)
    }
    .ok_or_else(out_of_range)
}

/// Entries merged strictly before `cutoff`, oldest first.
pub fn stale_entries(recency: &PackageRecency, cutoff: NaiveDateTime) -> Vec<StaleEntry> {
    recency
        .sorted()
        .into_iter()
        .filter(|(_, last_merged)| *last_merged < cutoff)
        .map(|(package, last_merged)| StaleEntry {
            package: package.to_string(),
            last_merged,
        })
        .collect()
}

/// Write the report in the requested format.
pub fn render<W: Write>(
    entries: &[StaleEntry],
    format: OutputFormat,
    with_dates: bool,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            let date_style = Style::new().dim();
            for entry in entries {
                if with_dates {
                    writeln!(
                        out,
                        "{}\t{}",
                        entry.package,
                        date_style.apply_to(entry.last_merged.format("%Y-%m-%d %H:%M:%S"))
                    )?;
                } else {
                    writeln!(out, "{}", entry.package)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
