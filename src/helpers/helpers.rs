//! Supplementary object helpers.

use crate::error::{ObjectError, Result};
use crate::merge::DELETION_PREFIX;
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// Duplicates a value by round-tripping it through JSON.
///
/// Non-finite floats (`NaN`, infinities) have no JSON form and come back as
/// `null`.
pub fn duplicate(value: &Value) -> Result<Value> {
    let json = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&json)?)
}

/// FilterOptions configures [`filter_object`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    /// Keep `-=key` deletion markers even though the template lacks them.
    pub keep_special: bool,
    /// Take values from the template instead of the source.
    pub template_values: bool,
}

impl FilterOptions {
    pub fn new() -> Self {
        FilterOptions::default()
    }

    pub fn keep_special(mut self, value: bool) -> Self {
        self.keep_special = value;
        self
    }

    pub fn template_values(mut self, value: bool) -> Self {
        self.template_values = value;
        self
    }
}

/// Filters the contents of a source object using the structure of a template
/// object. Only keys which exist in the template are kept.
pub fn filter_object(source: &Map, template: &Map, options: FilterOptions) -> Map {
    let mut filtered = Map::new();
    for (key, value) in source {
        match (value, template.get(key)) {
            (Value::Map(s), Some(Value::Map(t))) => {
                filtered.set(key.clone(), filter_object(s, t, options));
            }
            (_, Some(t)) => {
                let kept = if options.template_values { t } else { value };
                filtered.set(key.clone(), kept.clone());
            }
            (_, None) if options.keep_special && key.starts_with(DELETION_PREFIX) => {
                filtered.set(key.clone(), value.clone());
            }
            (_, None) => {}
        }
    }
    filtered
}

/// Inverts an object by using its values as keys and its keys as values.
///
/// Strings, numbers and booleans are usable as keys; any other value fails.
/// When two keys share a value, the last one in key order wins.
pub fn invert_object(object: &Map) -> Result<Map> {
    let mut inverted = Map::new();
    for (key, value) in object {
        let new_key = match value {
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(ObjectError::NotInvertible {
                    key: key.clone(),
                    kind: other.kind(),
                })
            }
        };
        inverted.set(new_key, key.as_str());
    }
    Ok(inverted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{from_json, ValueKind};

    fn map(json: &str) -> Map {
        match from_json(json).unwrap() {
            Value::Map(m) => m,
            other => panic!("expected a map, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate() {
        let value = from_json(r#"{"a": [1, {"b": "c"}], "d": null}"#).unwrap();
        assert_eq!(duplicate(&value).unwrap(), value);
    }

    #[test]
    fn test_duplicate_non_finite() {
        let mut m = Map::new();
        m.set("nan", f64::NAN);
        m.set("inf", f64::INFINITY);
        m.set("ok", 1.5);
        let copy = duplicate(&Value::Map(m)).unwrap();
        assert_eq!(copy, from_json(r#"{"nan": null, "inf": null, "ok": 1.5}"#).unwrap());
    }

    #[test]
    fn test_filter_object() {
        let source = map(
            r#"{"foo": {"number": 1, "name": "Tim", "topping": "olives"}, "bar": "baz"}"#,
        );
        let template = map(
            r#"{"foo": {"number": 0, "name": "Mit", "style": "bold"}, "other": 72}"#,
        );
        assert_eq!(
            filter_object(&source, &template, FilterOptions::new()),
            map(r#"{"foo": {"number": 1, "name": "Tim"}}"#)
        );
        assert_eq!(
            filter_object(&source, &template, FilterOptions::new().template_values(true)),
            map(r#"{"foo": {"number": 0, "name": "Mit"}}"#)
        );
    }

    #[test]
    fn test_filter_keep_special() {
        let source = map(r#"{"a": 1, "-=b": null, "c": 2}"#);
        let template = map(r#"{"a": 0}"#);
        assert_eq!(filter_object(&source, &template, FilterOptions::new()), map(r#"{"a": 1}"#));
        assert_eq!(
            filter_object(&source, &template, FilterOptions::new().keep_special(true)),
            map(r#"{"a": 1, "-=b": null}"#)
        );
    }

    #[test]
    fn test_invert_object() {
        let obj = map(r#"{"a": "x", "b": 2, "c": true}"#);
        assert_eq!(
            invert_object(&obj).unwrap(),
            map(r#"{"x": "a", "2": "b", "true": "c"}"#)
        );
    }

    #[test]
    fn test_invert_rejects_nested() {
        let obj = map(r#"{"a": {"b": 1}}"#);
        match invert_object(&obj) {
            Err(ObjectError::NotInvertible { key, kind }) => {
                assert_eq!(key, "a");
                assert_eq!(kind, ValueKind::Object);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
