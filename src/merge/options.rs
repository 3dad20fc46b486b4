//! Merge options.

use serde::{Deserialize, Serialize};

/// MergeOptions controls how [`merge_object`](super::merge_object) combines
/// two maps.
///
/// Deserializes from camelCase keys (`insertKeys`, `enforceTypes`, ...) and
/// any missing key takes its default, so `{"overwrite": false}` is a valid
/// options document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeOptions {
    /// Insert new top-level keys which do not exist in the original.
    pub insert_keys: bool,
    /// Insert new keys into nested maps which already exist in the original.
    pub insert_values: bool,
    /// Replace existing values in the original.
    pub overwrite: bool,
    /// Merge inner maps recursively instead of replacing them.
    pub recursive: bool,
    /// Apply the merge to the caller's map rather than to a copy of it.
    pub inplace: bool,
    /// Fail when a value would be replaced by one of a different type.
    pub enforce_types: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions {
            insert_keys: true,
            insert_values: true,
            overwrite: true,
            recursive: true,
            inplace: true,
            enforce_types: false,
        }
    }
}

impl MergeOptions {
    /// Creates options with every default in place.
    pub fn new() -> Self {
        MergeOptions::default()
    }

    pub fn insert_keys(mut self, value: bool) -> Self {
        self.insert_keys = value;
        self
    }

    pub fn insert_values(mut self, value: bool) -> Self {
        self.insert_values = value;
        self
    }

    pub fn overwrite(mut self, value: bool) -> Self {
        self.overwrite = value;
        self
    }

    pub fn recursive(mut self, value: bool) -> Self {
        self.recursive = value;
        self
    }

    pub fn inplace(mut self, value: bool) -> Self {
        self.inplace = value;
        self
    }

    pub fn enforce_types(mut self, value: bool) -> Self {
        self.enforce_types = value;
        self
    }

    /// Options for merging one level down: below the top level, new keys are
    /// governed by `insert_values`.
    pub(crate) fn nested(&self) -> Self {
        MergeOptions {
            insert_keys: self.insert_values,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MergeOptions::new();
        assert!(options.insert_keys);
        assert!(options.insert_values);
        assert!(options.overwrite);
        assert!(options.recursive);
        assert!(options.inplace);
        assert!(!options.enforce_types);
    }

    #[test]
    fn test_partial_document() {
        let options: MergeOptions =
            serde_json::from_str(r#"{"insertKeys": false, "enforceTypes": true}"#).unwrap();
        assert_eq!(
            options,
            MergeOptions::new().insert_keys(false).enforce_types(true)
        );
    }

    #[test]
    fn test_nested_uses_insert_values() {
        let options = MergeOptions::new().insert_keys(true).insert_values(false);
        let nested = options.nested();
        assert!(!nested.insert_keys);
        assert!(!nested.insert_values);
    }
}
