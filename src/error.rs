//! Error types shared by the object helpers.

use crate::value::ValueKind;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ObjectError>;

/// ObjectError represents a failure of one of the structural helpers.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// Nesting went deeper than the configured guard, most likely a
    /// pathologically deep document.
    #[error("maximum depth of {max_depth} exceeded")]
    RecursionLimit { max_depth: usize },

    #[error("{path}: mismatched data types during merge: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("{path}: cannot descend into a value of type {kind}")]
    PathBlocked { path: String, kind: ValueKind },

    #[error("empty property path")]
    EmptyPath,

    #[error("{key}: value of type {kind} cannot be used as a key")]
    NotInvertible { key: String, kind: ValueKind },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ObjectError {
    /// Creates a recursion limit error.
    pub fn recursion_limit(max_depth: usize) -> Self {
        ObjectError::RecursionLimit { max_depth }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(path: impl Into<String>, expected: ValueKind, actual: ValueKind) -> Self {
        ObjectError::TypeMismatch {
            path: path.into(),
            expected,
            actual,
        }
    }

    /// Creates a blocked path error.
    pub fn path_blocked(path: impl Into<String>, kind: ValueKind) -> Self {
        ObjectError::PathBlocked {
            path: path.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ObjectError::type_mismatch("a.b", ValueKind::Number, ValueKind::String);
        assert_eq!(
            err.to_string(),
            "a.b: mismatched data types during merge: expected number, got string"
        );
    }

    #[test]
    fn test_recursion_limit_display() {
        let err = ObjectError::recursion_limit(100);
        assert!(err.to_string().contains("100"));
    }
}
