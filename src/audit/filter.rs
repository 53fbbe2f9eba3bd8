//! Installation filter
//!
//! Keeps only merge events whose package is still installed and resolves
//! each of them to its version independent `category/package` key.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::Result;
use crate::error::history::invalid_atom;
use crate::history::MergeEvent;
use crate::portage::{Atom, PackageDatabase};

/// A merge event confirmed against the installed package database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMerge {
    pub key: String,
    pub timestamp: NaiveDateTime,
}

/// Resolve merge events against the database.
///
/// Events whose atom matches nothing installed are dropped. When several
/// installed versions match, the highest version is used; all of them share
/// the same key.
pub fn resolve_installed<D>(db: &D, events: &[MergeEvent]) -> Result<Vec<ResolvedMerge>>
where
    D: PackageDatabase + ?Sized,
{
    let mut resolved = Vec::with_capacity(events.len());

    for event in events {
        let atom = Atom::parse(&event.atom)
            .map_err(|reason| invalid_atom(event.line, &event.atom, reason))?;

        let Some(best) = db
            .match_atom(&atom)?
            .into_iter()
            .max_by(|a, b| a.version.cmp(&b.version))
        else {
            debug!(line = event.line, atom = %event.atom, "Not installed, skipping");
            continue;
        };

        resolved.push(ResolvedMerge {
            key: best.key(),
            timestamp: event.timestamp,
        });
    }

    debug!(
        events = events.len(),
        installed = resolved.len(),
        "Resolved merge events against installed packages"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaleError;
    use crate::portage::VarDb;
    use crate::portage::cpv::Cpv;
    use crate::portage::vardb::InstalledPackage;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn db(installed: &[&str]) -> VarDb {
        let packages = installed
            .iter()
            .map(|s| InstalledPackage {
                cpv: Cpv::parse(s).unwrap(),
                slot: None,
            })
            .collect();
        VarDb::from_packages(PathBuf::from("/var/db/pkg"), packages)
    }

    fn event(line: usize, atom: &str) -> MergeEvent {
        MergeEvent {
            line,
            timestamp: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, line as u32)
                .unwrap(),
            atom: atom.to_string(),
        }
    }

    #[test]
    fn test_uninstalled_events_dropped() {
        let db = db(&["cat/pkg-1.0"]);
        let resolved =
            resolve_installed(&db, &[event(1, "cat/pkg-1.0"), event(2, "cat/gone-3.0")]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].key, "cat/pkg");
        assert_eq!(resolved[0].timestamp, event(1, "").timestamp);
    }

    #[test]
    fn test_replaced_version_dropped() {
        let db = db(&["cat/pkg-2.0"]);
        let resolved = resolve_installed(&db, &[event(1, "cat/pkg-1.0")]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_multiple_matches_share_key() {
        let db = db(&["dev-lang/python-3.12.1", "dev-lang/python-3.11.7"]);
        let resolved = resolve_installed(&db, &[event(1, ">=dev-lang/python-3.11")]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].key, "dev-lang/python");
    }

    #[test]
    fn test_invalid_atom_is_fatal() {
        let db = db(&[]);
        let err = resolve_installed(&db, &[event(4, "not an atom")]).unwrap_err();
        match err {
            StaleError::InvalidAtom { line, atom, .. } => {
                assert_eq!(line, 4);
                assert_eq!(atom, "not an atom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
