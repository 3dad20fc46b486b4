//! Structural difference of two nested maps.

use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// DiffOptions configures [`diff_object`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Only recognize differences for keys which also exist in the original.
    pub inner: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        DiffOptions::default()
    }

    pub fn inner(mut self, inner: bool) -> Self {
        self.inner = inner;
        self
    }
}

/// Deeply differences an object against some other, returning the keys and
/// values of `other` which differ from those in `original`.
///
/// Nested maps are diffed recursively and only their changed sub-keys are
/// reported. Values of different kinds, and lists that are not equal, are
/// reported whole.
pub fn diff_object(original: &Map, other: &Map, options: DiffOptions) -> Map {
    let mut diff = Map::new();
    for (key, v1) in other {
        let v0 = original.get(key);
        if options.inner && v0.is_none() {
            continue;
        }
        if let Some(changed) = difference(v0, v1, options) {
            diff.set(key.clone(), changed);
        }
    }
    diff
}

fn difference(v0: Option<&Value>, v1: &Value, options: DiffOptions) -> Option<Value> {
    let Some(v0) = v0 else {
        return Some(v1.clone());
    };
    if v0.kind() != v1.kind() {
        return Some(v1.clone());
    }
    match (v0, v1) {
        (Value::Map(m0), Value::Map(m1)) => {
            if m0.is_empty() != m1.is_empty() {
                return Some(v1.clone());
            }
            let inner = diff_object(m0, m1, options);
            (!inner.is_empty()).then(|| Value::Map(inner))
        }
        _ => (v0 != v1).then(|| v1.clone()),
    }
}
