//! Dotted-path property access over nested maps.

use super::DottedPath;
use crate::error::{ObjectError, Result};
use crate::value::{Map, Value};

/// Searches through an object to retrieve a value by a dotted key.
///
/// `get_property(obj, "a.b.c")` returns `obj[a][b][c]`. Lists along the way
/// may be indexed with a numeric segment. Returns `None` when any segment is
/// missing or lands on a scalar, and for an empty path.
pub fn get_property<'a>(object: &'a Map, path: impl AsRef<str>) -> Option<&'a Value> {
    let path = DottedPath::parse(path.as_ref());
    let mut segments = path.iter();
    let mut target = object.get(segments.next()?)?;
    for segment in segments {
        target = child(target, segment)?;
    }
    Some(target)
}

/// Tests whether an object has a property or nested property.
///
/// Presence is what counts: a stored `null` is still a property.
pub fn has_property(object: &Map, path: impl AsRef<str>) -> bool {
    get_property(object, path).is_some()
}

/// Assigns a value at a dotted key, creating intermediate maps as needed.
///
/// An existing intermediate value that is not a map is never replaced; the
/// call fails with [`ObjectError::PathBlocked`] and leaves the object as it
/// was. Returns whether the stored value changed.
pub fn set_property(
    object: &mut Map,
    path: impl AsRef<str>,
    value: impl Into<Value>,
) -> Result<bool> {
    let path = DottedPath::parse(path.as_ref());
    let (key, parents) = path.as_slice().split_last().ok_or(ObjectError::EmptyPath)?;

    let mut target = object;
    for (depth, segment) in parents.iter().enumerate() {
        // Intermediates are only created past the last existing segment, so a
        // blocked path is detected before anything was inserted.
        let next = target
            .entry(segment.clone())
            .or_insert_with(|| Value::Map(Map::new()));
        target = match next {
            Value::Map(m) => m,
            other => {
                return Err(ObjectError::path_blocked(
                    path.prefix(depth + 1).to_string(),
                    other.kind(),
                ))
            }
        };
    }

    let value = value.into();
    if target.get(key) == Some(&value) {
        return Ok(false);
    }
    target.set(key.clone(), value);
    Ok(true)
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Map(m) => m.get(segment),
        Value::List(l) => segment.parse::<usize>().ok().and_then(|i| l.get(i)),
        _ => None,
    }
}
