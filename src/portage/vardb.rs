//! Installed package database
//!
//! Reads the installed package database (`/var/db/pkg`), which stores one
//! directory per installed package: `<category>/<package>-<version>/`.
//! The only file consulted inside an entry is `SLOT`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::atom::Atom;
use super::cpv::Cpv;
use crate::error::Result;
use crate::error::db::{open_failed, read_failed};

/// Default location of the installed package database
pub const DEFAULT_DB_PATH: &str = "/var/db/pkg";

/// Lookup capability over the set of installed packages.
///
/// Decomposing a match into category and name is done through the returned
/// [`Cpv`] itself.
pub trait PackageDatabase {
    /// All installed packages satisfying `atom`, in database order.
    fn match_atom(&self, atom: &Atom) -> Result<Vec<Cpv>>;
}

/// One installed package
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    pub cpv: Cpv,
    pub slot: Option<String>,
}

/// Read-only snapshot of the installed package database.
#[derive(Debug)]
pub struct VarDb {
    path: PathBuf,
    packages: Vec<InstalledPackage>,
    /// `category/package` -> indices into `packages`
    by_key: HashMap<String, Vec<usize>>,
}

impl VarDb {
    /// Scan the database directory at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(open_failed(
                path.display().to_string(),
                "not a directory or does not exist",
            ));
        }

        let mut packages = Vec::new();
        let walker = WalkDir::new(path)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let entry_path = e
                    .path()
                    .map_or_else(|| path.display().to_string(), |p| p.display().to_string());
                read_failed(entry_path, e.to_string())
            })?;
            if !entry.file_type().is_dir() || is_hidden(entry.file_name()) {
                continue;
            }

            let Some(package) = read_entry(entry.path())? else {
                continue;
            };
            packages.push(package);
        }

        debug!(
            path = %path.display(),
            count = packages.len(),
            "Loaded installed package database"
        );
        Ok(Self::from_packages(path.to_path_buf(), packages))
    }

    /// Build a database from an already collected package list.
    pub fn from_packages(path: PathBuf, packages: Vec<InstalledPackage>) -> Self {
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, package) in packages.iter().enumerate() {
            by_key.entry(package.cpv.key()).or_default().push(idx);
        }
        Self {
            path,
            packages,
            by_key,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[allow(dead_code)] // used in tests
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageDatabase for VarDb {
    fn match_atom(&self, atom: &Atom) -> Result<Vec<Cpv>> {
        let Some(indices) = self.by_key.get(&atom.key()) else {
            return Ok(Vec::new());
        };
        Ok(indices
            .iter()
            .map(|&idx| &self.packages[idx])
            .filter(|package| atom.matches(&package.cpv, package.slot.as_deref()))
            .map(|package| package.cpv.clone())
            .collect())
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

/// Read one `<category>/<package>-<version>` directory. Entries that are not
/// package directories (in-progress merges, stray files) yield `None`.
fn read_entry(dir: &Path) -> Result<Option<InstalledPackage>> {
    let (Some(category), Some(name)) = (
        dir.parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str()),
        dir.file_name().and_then(|n| n.to_str()),
    ) else {
        debug!(path = %dir.display(), "Skipping non UTF-8 database entry");
        return Ok(None);
    };

    let Some(cpv) = Cpv::from_parts(category, name) else {
        debug!(path = %dir.display(), "Skipping unrecognised database entry");
        return Ok(None);
    };

    let slot_path = dir.join("SLOT");
    let slot = match std::fs::read_to_string(&slot_path) {
        Ok(content) => content
            .trim()
            .split('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(read_failed(slot_path.display().to_string(), e.to_string())),
    };

    Ok(Some(InstalledPackage { cpv, slot }))
}
