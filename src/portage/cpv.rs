//! Installed package identifiers (`category/package-version`).

use std::fmt;

use super::version::Version;

/// A fully versioned package identifier, decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpv {
    pub category: String,
    pub package: String,
    pub version: Version,
}

impl Cpv {
    /// Parses `category/package-version`.
    #[allow(dead_code)] // used in tests
    pub fn parse(s: &str) -> Option<Self> {
        let (category, rest) = s.split_once('/')?;
        Self::from_parts(category, rest)
    }

    /// Builds a `Cpv` from a category and a `package-version` string, as
    /// found in the package database directory layout.
    pub fn from_parts(category: &str, name_version: &str) -> Option<Self> {
        if !is_valid_category(category) {
            return None;
        }
        let (package, version) = split_name_version(name_version)?;
        Some(Self {
            category: category.to_string(),
            package: package.to_string(),
            version,
        })
    }

    /// Version independent key, `category/package`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.category, self.package)
    }
}

impl fmt::Display for Cpv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}-{}", self.category, self.package, self.version)
    }
}

/// Split `package-version` at the first hyphen whose remainder is a valid
/// version. Package names cannot end in a hyphen followed by a version, so
/// the leftmost such split is the only one.
pub fn split_name_version(s: &str) -> Option<(&str, Version)> {
    s.match_indices('-').find_map(|(idx, _)| {
        let name = &s[..idx];
        if !is_valid_package_name(name) {
            return None;
        }
        Version::parse(&s[idx + 1..]).map(|version| (name, version))
    })
}

pub fn is_valid_category(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(['-', '.', '+'])
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
}

pub fn is_valid_package_name(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with(['-', '+'])
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '-'))
}
