//! Structural merge of nested maps.

use super::MergeOptions;
use crate::error::{ObjectError, Result};
use crate::flatten::{expand_object_with_depth, DEFAULT_MAX_DEPTH};
use crate::path::DottedPath;
use crate::value::{Map, Value};
use tracing::{debug, trace};

/// Prefix marking a key of the other object as a deletion instruction.
pub const DELETION_PREFIX: &str = "-=";

/// Updates `original` with the keys and values of `other`.
///
/// With `inplace` set the caller's map receives the result; otherwise it is
/// left untouched. Either way the merged map is returned. A failed merge never
/// leaves `original` half-updated.
///
/// ```
/// use object_helpers::merge::{merge_object, MergeOptions};
/// use object_helpers::value::Map;
///
/// let mut original = Map::new();
/// original.set("k1", "v1");
/// let mut other = Map::new();
/// other.set("k2", "v2");
///
/// let options = MergeOptions::new().insert_keys(false);
/// let merged = merge_object(&mut original, &other, &options).unwrap();
/// assert!(!merged.has("k2"));
/// ```
pub fn merge_object(original: &mut Map, other: &Map, options: &MergeOptions) -> Result<Map> {
    Merger::new().merge(original, other, options)
}

/// Owned variant of [`merge_object`]: merges into `original` and returns it.
/// The `inplace` option has no effect since the caller gave up the map.
pub fn merge_object_into(original: Map, other: &Map, options: &MergeOptions) -> Result<Map> {
    Merger::new().merge_into(original, other, options)
}

/// Merger carries the depth guard applied to every merge it runs.
#[derive(Debug, Clone, Copy)]
pub struct Merger {
    max_depth: usize,
}

impl Default for Merger {
    fn default() -> Self {
        Merger {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Merger {
    pub fn new() -> Self {
        Merger::default()
    }

    /// Sets the maximum nesting depth before a merge gives up.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// See [`merge_object`].
    pub fn merge(&self, original: &mut Map, other: &Map, options: &MergeOptions) -> Result<Map> {
        let merged = self.merge_into(original.clone(), other, options)?;
        if options.inplace {
            *original = merged.clone();
        }
        Ok(merged)
    }

    /// See [`merge_object_into`].
    pub fn merge_into(&self, original: Map, other: &Map, options: &MergeOptions) -> Result<Map> {
        let mut original = if has_dotted_keys(&original) {
            expand_object_with_depth(&original, self.max_depth)?
        } else {
            original
        };
        if has_dotted_keys(other) {
            let other = expand_object_with_depth(other, self.max_depth)?;
            self.merge_level(&mut original, &other, options, &DottedPath::new(), 0)?;
        } else {
            self.merge_level(&mut original, other, options, &DottedPath::new(), 0)?;
        }
        Ok(original)
    }

    fn merge_level(
        &self,
        original: &mut Map,
        other: &Map,
        options: &MergeOptions,
        path: &DottedPath,
        depth: usize,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(ObjectError::recursion_limit(self.max_depth));
        }
        trace!(path = %path, depth, keys = other.len(), "merging level");

        let mut deletions = Vec::new();
        for (key, value) in other {
            if let Some(target) = deletion_target(key, value) {
                deletions.push(target);
                continue;
            }
            if original.has(key) {
                self.update(original, key, value, options, path, depth)?;
            } else if options.insert_keys {
                let inserted = self.inserted_value(key, value, path, depth)?;
                original.set(key.clone(), inserted);
            }
        }

        // Deletions run last so that `-=k` wins over a sibling `k`.
        for target in deletions {
            if original.delete(target).is_some() {
                debug!(path = %path.with(target), "deleted key");
            }
        }
        Ok(())
    }

    fn update(
        &self,
        original: &mut Map,
        key: &str,
        value: &Value,
        options: &MergeOptions,
        path: &DottedPath,
        depth: usize,
    ) -> Result<()> {
        let Some(existing) = original.get_mut(key) else {
            return Ok(());
        };
        match (existing, value) {
            (Value::Map(inner), Value::Map(incoming)) if options.recursive => {
                self.merge_level(inner, incoming, &options.nested(), &path.with(key), depth + 1)
            }
            (existing, value) => {
                if !options.overwrite {
                    return Ok(());
                }
                if options.enforce_types && existing.kind() != value.kind() {
                    let at = path.with(key);
                    let (expected, actual) = (existing.kind(), value.kind());
                    debug!(path = %at, %expected, %actual, "type mismatch");
                    return Err(ObjectError::type_mismatch(at.to_string(), expected, actual));
                }
                *existing = value.clone();
                Ok(())
            }
        }
    }

    /// New maps are rebuilt through a default merge into an empty map, which
    /// copies them while dropping their deletion markers.
    fn inserted_value(
        &self,
        key: &str,
        value: &Value,
        path: &DottedPath,
        depth: usize,
    ) -> Result<Value> {
        match value {
            Value::Map(incoming) => {
                let mut fresh = Map::new();
                let defaults = MergeOptions::default();
                self.merge_level(&mut fresh, incoming, &defaults, &path.with(key), depth + 1)?;
                Ok(Value::Map(fresh))
            }
            other => Ok(other.clone()),
        }
    }
}

/// Returns the key to delete when `key` is a deletion marker holding exactly
/// `null`. Markers with any other value are ordinary keys.
fn deletion_target<'a>(key: &'a str, value: &Value) -> Option<&'a str> {
    if !value.is_null() {
        return None;
    }
    key.strip_prefix(DELETION_PREFIX)
}

fn has_dotted_keys(map: &Map) -> bool {
    map.keys().any(|k| k.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_target() {
        assert_eq!(deletion_target("-=name", &Value::Null), Some("name"));
        assert_eq!(deletion_target("-=name", &Value::Bool(false)), None);
        assert_eq!(deletion_target("-=name", &Value::Int(0)), None);
        assert_eq!(deletion_target("-=name", &Value::from("")), None);
        assert_eq!(deletion_target("name", &Value::Null), None);
    }

    #[test]
    fn test_has_dotted_keys() {
        let mut map = Map::new();
        map.set("plain", 1i64);
        assert!(!has_dotted_keys(&map));
        map.set("a.b", 1i64);
        assert!(has_dotted_keys(&map));
    }
}
