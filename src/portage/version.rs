//! Package version types.
//!
//! Versions follow the ebuild syntax
//! `N(.N)*[a-z]?(_(alpha|beta|pre|rc|p)N?)*(-rN)?` and order the way the
//! package manager orders them.

use std::cmp::Ordering;
use std::fmt;

/// Version suffix kinds, declared in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuffixKind {
    Alpha,
    Beta,
    Pre,
    Rc,
    P,
}

impl SuffixKind {
    fn strip(s: &str) -> Option<(Self, &str)> {
        // "pre" must be tried before "p"
        const KINDS: [(&str, SuffixKind); 5] = [
            ("alpha", SuffixKind::Alpha),
            ("beta", SuffixKind::Beta),
            ("pre", SuffixKind::Pre),
            ("rc", SuffixKind::Rc),
            ("p", SuffixKind::P),
        ];
        KINDS
            .iter()
            .find_map(|(name, kind)| s.strip_prefix(name).map(|rest| (*kind, rest)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suffix {
    pub kind: SuffixKind,
    /// Digits following the suffix name, empty when absent.
    pub number: String,
}

/// A parsed package version with comparison support.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    /// The full version string (e.g., "1.2.3_rc1-r2").
    pub full: String,
    numbers: Vec<String>,
    letter: Option<char>,
    suffixes: Vec<Suffix>,
    /// Revision digits, empty when the version has no `-rN` part.
    revision: String,
}

impl Version {
    /// Parses a version string, returning `None` if it is not a valid version.
    pub fn parse(s: &str) -> Option<Self> {
        let (body, revision) = match s.rfind("-r") {
            Some(idx) if is_digits(&s[idx + 2..]) => (&s[..idx], s[idx + 2..].to_string()),
            _ => (s, String::new()),
        };

        let mut parts = body.split('_');
        let head = parts.next()?;

        let (numeric, letter) = match head.chars().last() {
            Some(c) if c.is_ascii_lowercase() => (&head[..head.len() - 1], Some(c)),
            _ => (head, None),
        };

        let numbers: Vec<String> = numeric.split('.').map(str::to_string).collect();
        if numbers.iter().any(|n| !is_digits(n)) {
            return None;
        }

        let mut suffixes = Vec::new();
        for part in parts {
            let (kind, number) = SuffixKind::strip(part)?;
            if !number.is_empty() && !is_digits(number) {
                return None;
            }
            suffixes.push(Suffix {
                kind,
                number: number.to_string(),
            });
        }

        Some(Self {
            full: s.to_string(),
            numbers,
            letter,
            suffixes,
            revision,
        })
    }

    /// The version with any revision removed, as used by the `~` operator.
    pub fn without_revision(&self) -> Self {
        let full = match self.full.rfind("-r") {
            Some(idx) if !self.revision.is_empty() => self.full[..idx].to_string(),
            _ => self.full.clone(),
        };
        Self {
            full,
            revision: String::new(),
            ..self.clone()
        }
    }

    pub fn revision(&self) -> &str {
        if self.revision.is_empty() {
            "0"
        } else {
            &self.revision
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numbers(&self.numbers, &other.numbers)
            .then_with(|| self.letter.cmp(&other.letter))
            .then_with(|| compare_suffixes(&self.suffixes, &other.suffixes))
            .then_with(|| compare_integers(self.revision(), other.revision()))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit strings as arbitrarily large integers.
fn compare_integers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_numbers(a: &[String], b: &[String]) -> Ordering {
    let (Some(a_first), Some(b_first)) = (a.first(), b.first()) else {
        return a.len().cmp(&b.len());
    };
    match compare_integers(a_first, b_first) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for (x, y) in a.iter().zip(b.iter()).skip(1) {
        // A leading zero makes the component compare as a decimal fraction
        let ord = if x.starts_with('0') || y.starts_with('0') {
            x.trim_end_matches('0').cmp(y.trim_end_matches('0'))
        } else {
            compare_integers(x, y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.len().cmp(&b.len())
}

fn compare_suffixes(a: &[Suffix], b: &[Suffix]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = x.kind.cmp(&y.kind).then_with(|| {
            compare_integers(
                if x.number.is_empty() { "0" } else { &x.number },
                if y.number.is_empty() { "0" } else { &y.number },
            )
        });
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // An extra suffix sorts below the bare version, except for _p
    match a.len().cmp(&b.len()) {
        Ordering::Greater => extra_suffix_order(&a[b.len()]),
        Ordering::Less => extra_suffix_order(&b[a.len()]).reverse(),
        Ordering::Equal => Ordering::Equal,
    }
}

fn extra_suffix_order(extra: &Suffix) -> Ordering {
    if extra.kind == SuffixKind::P {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_components() {
        let version = v("1.2.3b_rc4_p1-r2");
        assert_eq!(version.numbers, vec!["1", "2", "3"]);
        assert_eq!(version.letter, Some('b'));
        assert_eq!(version.suffixes.len(), 2);
        assert_eq!(version.suffixes[0].kind, SuffixKind::Rc);
        assert_eq!(version.suffixes[1].number, "1");
        assert_eq!(version.revision(), "2");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Version::parse("").is_none());
        assert!(Version::parse("abc").is_none());
        assert!(Version::parse("1..2").is_none());
        assert!(Version::parse("1.0_foo").is_none());
        assert!(Version::parse("1.0-x").is_none());
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("2") > v("1.99"));
        assert!(v("1.0.1") > v("1.0"));
        assert_eq!(v("1.0"), v("1.0"));
    }

    #[test]
    fn test_leading_zero_components() {
        assert!(v("1.01") < v("1.1"));
        assert!(v("1.010") == v("1.01"));
    }

    #[test]
    fn test_letter_ordering() {
        assert!(v("1.0a") > v("1.0"));
        assert!(v("1.0b") > v("1.0a"));
    }

    #[test]
    fn test_suffix_ordering() {
        assert!(v("1.0_alpha") < v("1.0_beta"));
        assert!(v("1.0_beta2") < v("1.0_pre"));
        assert!(v("1.0_rc1") < v("1.0"));
        assert!(v("1.0") < v("1.0_p1"));
        assert!(v("1.0_rc1") < v("1.0_rc2"));
        assert!(v("1.0_p1") < v("1.0_p1_p1"));
        assert!(v("1.0_p1_alpha") < v("1.0_p1"));
    }

    #[test]
    fn test_revision_ordering() {
        assert!(v("1.0-r1") > v("1.0"));
        assert!(v("1.0-r10") > v("1.0-r9"));
        assert_eq!(v("1.0-r0"), v("1.0"));
    }

    #[test]
    fn test_without_revision() {
        let base = v("2.3-r4").without_revision();
        assert_eq!(base.full, "2.3");
        assert_eq!(base, v("2.3"));
    }

    #[test]
    fn test_large_numbers() {
        assert!(v("20240101000000000000") > v("20231231999999999999"));
    }
}
