//! Dotted version comparison.

use std::cmp::Ordering;
use std::fmt;

/// VersionInput is either a plain number or a dotted version string.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionInput {
    Number(f64),
    Text(String),
}

impl fmt::Display for VersionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionInput::Number(n) => write!(f, "{}", n),
            VersionInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for VersionInput {
    fn from(s: &str) -> Self {
        VersionInput::Text(s.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(s: String) -> Self {
        VersionInput::Text(s)
    }
}

impl From<f64> for VersionInput {
    fn from(n: f64) -> Self {
        VersionInput::Number(n)
    }
}

impl From<i64> for VersionInput {
    fn from(n: i64) -> Self {
        VersionInput::Number(n as f64)
    }
}

impl From<u32> for VersionInput {
    fn from(n: u32) -> Self {
        VersionInput::Number(f64::from(n))
    }
}

/// Returns whether a target version (`v1`) is more advanced than some other
/// reference version (`v0`).
///
/// Two plain numbers compare numerically. Anything else is compared part by
/// part, see [`compare_versions`].
pub fn is_newer_version(v1: impl Into<VersionInput>, v0: impl Into<VersionInput>) -> bool {
    let (v1, v0) = (v1.into(), v0.into());
    if let (VersionInput::Number(a), VersionInput::Number(b)) = (&v1, &v0) {
        return a > b;
    }
    compare_versions(&v1.to_string(), &v0.to_string()) == Ordering::Greater
}

/// Compares two dot-separated versions.
///
/// Parts are compared left to right, numerically when both parse as numbers
/// and lexically otherwise. Missing trailing parts count as zero, so `1.2`
/// and `1.2.0` are equal.
pub fn compare_versions(v1: &str, v0: &str) -> Ordering {
    let p1: Vec<&str> = v1.split('.').collect();
    let p0: Vec<&str> = v0.split('.').collect();
    let len = p1.len().max(p0.len());

    for i in 0..len {
        let ordering = match (p1.get(i), p0.get(i)) {
            (Some(a), Some(b)) => compare_part(a, b),
            (Some(a), None) if is_zero(a) => Ordering::Equal,
            (Some(_), None) => Ordering::Greater,
            (None, Some(b)) if is_zero(b) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn numeric(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }
    part.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn compare_part(a: &str, b: &str) -> Ordering {
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

fn is_zero(part: &str) -> bool {
    part.trim().is_empty() || numeric(part) == Some(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_versions() {
        assert!(is_newer_version("1.2.0", "1.1.9"));
        assert!(is_newer_version("2.0", "1.9.9"));
        assert!(is_newer_version("0.8.10", "0.8.9"));
        assert!(!is_newer_version("1.1.9", "1.2.0"));
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert!(!is_newer_version("1.2", "1.2.0"));
        assert!(!is_newer_version("1.2.0", "1.2"));
        assert_eq!(compare_versions("1.2", "1.2.0.0"), Ordering::Equal);
        assert!(is_newer_version("1.2.0.1", "1.2"));
    }

    #[test]
    fn test_equal_is_not_newer() {
        assert!(!is_newer_version("3.1.4", "3.1.4"));
    }

    #[test]
    fn test_numeric_inputs() {
        assert!(is_newer_version(10i64, 9i64));
        assert!(is_newer_version(0.9, 0.85));
        assert!(!is_newer_version(2u32, 2u32));
        assert!(is_newer_version(2u32, "1.9.9"));
    }

    #[test]
    fn test_non_numeric_parts() {
        assert!(is_newer_version("1.0.b", "1.0.a"));
        assert!(!is_newer_version("1.0.alpha", "1.0.beta"));
        assert!(is_newer_version("1.0.1", "1.0.0-beta"));
    }
}
