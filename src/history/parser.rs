//! Merge log parsing
//!
//! Each merge record looks like
//! `Mon Jan 05 14:22:01 2024 >>> sys-apps/foo-1.0`. Newer portage-utils print
//! the timestamp as `2024-01-05T14:22:01` instead; both are accepted.
//! Lines without the `>>>` marker (headers, unmerges, blank lines) are skipped.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::Result;
use crate::error::history::timestamp;

const MERGE_MARKER: &str = ">>>";
const LEGACY_FORMAT: &str = "%b %d %H:%M:%S %Y";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Width of the weekday token that prefixes legacy timestamps ("Mon ")
const WEEKDAY_WIDTH: usize = 4;

/// A single merge record from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEvent {
    /// 1-based line number in the log
    pub line: usize,
    /// Local wall-clock time of the merge
    pub timestamp: NaiveDateTime,
    /// Version qualified package specifier, e.g. `sys-apps/foo-1.0`
    pub atom: String,
}

/// Parse every merge record of a log. A timestamp that cannot be parsed
/// aborts the whole parse.
pub fn parse_merge_log(log: &str) -> Result<Vec<MergeEvent>> {
    let mut events = Vec::new();

    for (idx, line) in log.lines().enumerate() {
        let line_no = idx + 1;
        let mut segments = line.split(MERGE_MARKER);
        let (Some(stamp), Some(atom)) = (segments.next(), segments.next()) else {
            continue;
        };

        let atom = atom.trim();
        if atom.is_empty() {
            debug!(line = line_no, "Skipping merge record without a package");
            continue;
        }

        events.push(MergeEvent {
            line: line_no,
            timestamp: parse_timestamp(line_no, stamp)?,
            atom: atom.to_string(),
        });
    }

    debug!(count = events.len(), "Parsed merge log");
    Ok(events)
}

/// Parse the timestamp part of a merge record.
pub fn parse_timestamp(line: usize, text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let without_weekday = trimmed
        .char_indices()
        .nth(WEEKDAY_WIDTH)
        .map_or("", |(idx, _)| &trimmed[idx..]);

    match NaiveDateTime::parse_from_str(without_weekday, LEGACY_FORMAT) {
        Ok(parsed) => Ok(parsed),
        Err(legacy_err) => NaiveDateTime::parse_from_str(trimmed, ISO_FORMAT)
            .map_err(|_| timestamp(line, trimmed, legacy_err.to_string())),
    }
}
