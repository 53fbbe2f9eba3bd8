//! Package atoms: the specifiers used to look packages up in the database.
//!
//! Supported forms:
//! - `category/package`
//! - `category/package-version`, as printed by the merge log (exact match)
//! - `<op>category/package-version` with `=`, `>=`, `<=`, `>`, `<`, `~`
//! - `=category/package-version*` (version prefix match)
//!
//! Any form may carry a `:slot[/subslot]` and a `::repository` suffix.
//! Use-flag dependencies (`[...]`) are accepted and ignored.

use std::fmt;

use super::cpv::{Cpv, is_valid_category, is_valid_package_name, split_name_version};
use super::version::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Less,
    LessOrEqual,
    Equal,
    Approximate,
    GreaterOrEqual,
    Greater,
}

impl Operator {
    fn strip(s: &str) -> (Option<Self>, &str) {
        const OPERATORS: [(&str, Operator); 6] = [
            (">=", Operator::GreaterOrEqual),
            ("<=", Operator::LessOrEqual),
            ("=", Operator::Equal),
            ("~", Operator::Approximate),
            (">", Operator::Greater),
            ("<", Operator::Less),
        ];
        OPERATORS
            .iter()
            .find_map(|(prefix, op)| s.strip_prefix(prefix).map(|rest| (Some(*op), rest)))
            .unwrap_or((None, s))
    }

    fn as_str(self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "=",
            Operator::Approximate => "~",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
        }
    }
}

/// Version constraint carried by an atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub op: Operator,
    pub version: Version,
    /// `=cat/pkg-1.2*` form
    pub prefix: bool,
}

impl VersionConstraint {
    fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            Operator::Equal if self.prefix => candidate.full.starts_with(&self.version.full),
            Operator::Equal => candidate == &self.version,
            Operator::Approximate => {
                candidate.without_revision() == self.version.without_revision()
            }
            Operator::Less => candidate < &self.version,
            Operator::LessOrEqual => candidate <= &self.version,
            Operator::GreaterOrEqual => candidate >= &self.version,
            Operator::Greater => candidate > &self.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub category: String,
    pub package: String,
    pub constraint: Option<VersionConstraint>,
    pub slot: Option<String>,
}

impl Atom {
    /// Parses an atom, returning a description of the problem on failure.
    pub fn parse(input: &str) -> Result<Self, String> {
        let s = input.trim();
        if s.is_empty() {
            return Err("empty atom".to_string());
        }
        if s.starts_with('!') {
            return Err("blocker atoms cannot be looked up".to_string());
        }

        let s = match s.find('[') {
            Some(idx) if s.ends_with(']') => &s[..idx],
            Some(_) => return Err("unterminated use dependency".to_string()),
            None => s,
        };
        let s = s.split_once("::").map_or(s, |(atom, _repo)| atom);
        let (s, slot) = match s.split_once(':') {
            Some((atom, slot)) => {
                let slot = slot.split('/').next().unwrap_or_default();
                if slot.is_empty() {
                    return Err("empty slot".to_string());
                }
                (atom, Some(slot.to_string()))
            }
            None => (s, None),
        };

        let (op, s) = Operator::strip(s);
        let (s, prefix) = match s.strip_suffix('*') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if prefix && op != Some(Operator::Equal) {
            return Err("'*' suffix is only valid with '='".to_string());
        }

        let (category, rest) = s
            .split_once('/')
            .ok_or_else(|| "missing category".to_string())?;
        if !is_valid_category(category) {
            return Err(format!("invalid category '{category}'"));
        }

        let (package, constraint) = match (op, split_name_version(rest)) {
            (Some(op), Some((package, version))) => (
                package,
                Some(VersionConstraint {
                    op,
                    version,
                    prefix,
                }),
            ),
            (Some(_), None) => return Err("operator requires a version".to_string()),
            // A bare versioned atom names exactly that version
            (None, Some((package, version))) => (
                package,
                Some(VersionConstraint {
                    op: Operator::Equal,
                    version,
                    prefix: false,
                }),
            ),
            (None, None) => (rest, None),
        };
        if !is_valid_package_name(package) {
            return Err(format!("invalid package name '{package}'"));
        }

        Ok(Self {
            category: category.to_string(),
            package: package.to_string(),
            constraint,
            slot,
        })
    }

    /// Version independent key, `category/package`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.category, self.package)
    }

    /// Whether an installed package with the given slot satisfies this atom.
    pub fn matches(&self, cpv: &Cpv, slot: Option<&str>) -> bool {
        if cpv.category != self.category || cpv.package != self.package {
            return false;
        }
        if let Some(wanted) = &self.slot {
            if slot != Some(wanted.as_str()) {
                return false;
            }
        }
        self.constraint
            .as_ref()
            .is_none_or(|constraint| constraint.matches(&cpv.version))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(c) => write!(
                f,
                "{}{}/{}-{}{}",
                c.op.as_str(),
                self.category,
                self.package,
                c.version,
                if c.prefix { "*" } else { "" }
            )?,
            None => write!(f, "{}/{}", self.category, self.package)?,
        }
        if let Some(slot) = &self.slot {
            write!(f, ":{slot}")?;
        }
        Ok(())
    }
}
