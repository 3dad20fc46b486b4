//! Conversion between nested maps and single-level dotted-key maps.

use crate::error::{ObjectError, Result};
use crate::path::DottedPath;
use crate::value::{Map, Value};

/// Depth guard used when no explicit limit is given.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Flattens a possibly multi-dimensional object to a one-dimensional one by
/// converting all nested keys to dot notation.
///
/// Lists and empty maps are kept as leaves.
pub fn flatten_object(object: &Map) -> Result<Map> {
    flatten_object_with_depth(object, DEFAULT_MAX_DEPTH)
}

/// Same as [`flatten_object`] with an explicit depth guard.
pub fn flatten_object_with_depth(object: &Map, max_depth: usize) -> Result<Map> {
    let mut flat = Map::new();
    flatten_into(object, &DottedPath::new(), 0, max_depth, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    object: &Map,
    prefix: &DottedPath,
    depth: usize,
    max_depth: usize,
    flat: &mut Map,
) -> Result<()> {
    if depth > max_depth {
        return Err(ObjectError::recursion_limit(max_depth));
    }
    for (key, value) in object {
        let path = prefix.with(key.as_str());
        match value {
            Value::Map(inner) if !inner.is_empty() => {
                flatten_into(inner, &path, depth + 1, max_depth, flat)?;
            }
            _ => {
                flat.set(path.to_string(), value.clone());
            }
        }
    }
    Ok(())
}

/// Expands a flattened object back into nested maps by converting every
/// dot-notation key into inner objects.
///
/// Map values are expanded as well. When two keys address the same branch
/// their maps are merged; when a leaf and a branch collide, the key that
/// comes later in iteration order wins.
pub fn expand_object(object: &Map) -> Result<Map> {
    expand_object_with_depth(object, DEFAULT_MAX_DEPTH)
}

/// Same as [`expand_object`] with an explicit depth guard.
pub fn expand_object_with_depth(object: &Map, max_depth: usize) -> Result<Map> {
    expand_at(object, 0, max_depth)
}

fn expand_at(object: &Map, depth: usize, max_depth: usize) -> Result<Map> {
    if depth > max_depth {
        return Err(ObjectError::recursion_limit(max_depth));
    }
    let mut expanded = Map::new();
    for (key, value) in object {
        let value = match value {
            Value::Map(inner) => Value::Map(expand_at(inner, depth + 1, max_depth)?),
            other => other.clone(),
        };
        let segments: Vec<&str> = key.split('.').collect();
        insert_at(&mut expanded, &segments, value);
    }
    Ok(expanded)
}

fn insert_at(target: &mut Map, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [key] => place(target, key, value),
        [key, rest @ ..] => {
            let slot = target
                .entry(*key)
                .or_insert_with(|| Value::Map(Map::new()));
            if !slot.is_map() {
                *slot = Value::Map(Map::new());
            }
            if let Value::Map(inner) = slot {
                insert_at(inner, rest, value);
            }
        }
    }
}

/// Stores a value, merging into an existing map instead of replacing it.
fn place(target: &mut Map, key: &str, value: Value) {
    if let Value::Map(incoming) = value {
        if let Some(Value::Map(existing)) = target.get_mut(key) {
            for (k, v) in incoming {
                place(existing, &k, v);
            }
            return;
        }
        target.set(key, Value::Map(incoming));
        return;
    }
    target.set(key, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;

    fn map(json: &str) -> Map {
        match from_json(json).unwrap() {
            Value::Map(m) => m,
            other => panic!("expected a map, got {:?}", other),
        }
    }

    fn nested(levels: usize) -> Map {
        let mut inner = map(r#"{"leaf": 1}"#);
        for _ in 0..levels {
            let mut outer = Map::new();
            outer.set("n", inner);
            inner = outer;
        }
        inner
    }

    #[test]
    fn test_flatten() {
        let obj = map(r#"{"a": {"b": {"c": 1}, "d": "x"}, "e": true}"#);
        let flat = flatten_object(&obj).unwrap();
        assert_eq!(flat, map(r#"{"a.b.c": 1, "a.d": "x", "e": true}"#));
    }

    #[test]
    fn test_flatten_keeps_lists_and_empty_maps() {
        let obj = map(r#"{"a": [1, {"b": 2}], "c": {}, "d": {"e": {}}}"#);
        let flat = flatten_object(&obj).unwrap();
        assert_eq!(flat, map(r#"{"a": [1, {"b": 2}], "c": {}, "d.e": {}}"#));
    }

    #[test]
    fn test_flatten_depth_guard() {
        let obj = nested(10);
        assert!(flatten_object_with_depth(&obj, 10).is_ok());
        assert!(matches!(
            flatten_object_with_depth(&obj, 9),
            Err(ObjectError::RecursionLimit { max_depth: 9 })
        ));
    }

    #[test]
    fn test_expand() {
        let flat = map(r#"{"a.b.c": 1, "a.d": "x", "e": true}"#);
        let expanded = expand_object(&flat).unwrap();
        assert_eq!(expanded, map(r#"{"a": {"b": {"c": 1}, "d": "x"}, "e": true}"#));
    }

    #[test]
    fn test_expand_merges_branches() {
        let flat = map(r#"{"a": {"x": 1}, "a.y": 2, "b.c": {"d.e": 3}}"#);
        let expanded = expand_object(&flat).unwrap();
        assert_eq!(
            expanded,
            map(r#"{"a": {"x": 1, "y": 2}, "b": {"c": {"d": {"e": 3}}}}"#)
        );
    }

    #[test]
    fn test_expand_branch_replaces_leaf() {
        let flat = map(r#"{"a": 1, "a.b": 2}"#);
        assert_eq!(expand_object(&flat).unwrap(), map(r#"{"a": {"b": 2}}"#));
    }

    #[test]
    fn test_expand_depth_guard() {
        let obj = nested(5);
        assert!(expand_object_with_depth(&obj, 3).is_err());
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            r#"{"name": "Goblin", "attributes": {"hp": {"value": 7, "max": 7}, "ac": 15},
                "items": ["dagger", "shield"], "flags": {}, "notes": null}"#,
            r#"{"a": {"b": {}, "c": {"d": {}}}, "e": {}}"#,
            r#"{"rolls": [{"formula": {"dice": 2}}, {}], "m": {"n": [[1], {"o": null}]}}"#,
            r#"{"x": null, "y": {"z": null, "w": {"v": null}}}"#,
            r#"{"a": {"b": {"c": {"d": {"e": {"f": 1.5}}}}}, "g": false}"#,
        ];
        for json in cases {
            let obj = map(json);
            let flat = flatten_object(&obj).unwrap();
            assert_eq!(expand_object(&flat).unwrap(), obj, "round trip of {}", json);
        }
        assert_eq!(expand_object(&flatten_object(&nested(40)).unwrap()).unwrap(), nested(40));
    }
}
