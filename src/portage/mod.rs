//! Package manager data model: versions, identifiers, atoms and the
//! installed package database.

pub mod atom;
pub mod cpv;
pub mod vardb;
pub mod version;

pub use atom::Atom;
pub use vardb::{DEFAULT_DB_PATH, PackageDatabase, VarDb};
