//! Stale package audit
//!
//! The audit is a single forward pass:
//! fetch log -> parse events -> keep installed packages -> latest merge per
//! package -> sort and cut off.

pub mod filter;
pub mod recency;
pub mod report;

pub use recency::PackageRecency;
pub use report::{DEFAULT_MONTHS, OutputFormat, StaleEntry};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::Result;
use crate::history::{HistorySource, parse_merge_log};
use crate::portage::PackageDatabase;

/// Run the audit and return stale packages, oldest first.
pub fn run_audit<S, D>(
    source: &S,
    db: &D,
    months: i64,
    now: NaiveDateTime,
) -> Result<Vec<StaleEntry>>
where
    S: HistorySource + ?Sized,
    D: PackageDatabase + ?Sized,
{
    let limit = report::cutoff(now, months)?;
    debug!(months, cutoff = %limit, "Computed cutoff");

    let log = source.fetch()?;
    let events = parse_merge_log(&log)?;
    let resolved = filter::resolve_installed(db, &events)?;
    let recency: PackageRecency = resolved.into_iter().collect();

    let stale = report::stale_entries(&recency, limit);
    info!(
        source = %source.describe(),
        packages = recency.len(),
        stale = stale.len(),
        "Audit complete"
    );
    Ok(stale)
}
