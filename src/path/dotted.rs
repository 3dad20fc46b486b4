//! Dotted path type.

use std::fmt;

/// DottedPath is a parsed `a.b.c` property path.
///
/// Each segment is a mapping key (or a list index when reading). Parsing is
/// a plain split on `.`, so keys that themselves contain dots cannot be
/// addressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        DottedPath {
            segments: Vec::new(),
        }
    }

    /// Parses a dotted string. The empty string yields an empty path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return DottedPath::new();
        }
        path.split('.').map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: impl Into<String>) -> Self {
        let mut new_path = self.clone();
        new_path.push(segment);
        new_path
    }

    /// Returns the path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        DottedPath {
            segments: self.segments.iter().take(len).cloned().collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for DottedPath {
    fn from(path: &str) -> Self {
        DottedPath::parse(path)
    }
}

impl FromIterator<String> for DottedPath {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        DottedPath {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DottedPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
