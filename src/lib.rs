//! # Object Helpers
//!
//! Structural utilities for nested JSON/YAML-like objects.
//!
//! The helpers reconcile configuration-like documents: applying a partial
//! update to stored data, computing what changed between two states, and
//! addressing nested fields with `a.b.c` style paths.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON objects
//! - [`path`] - Dotted-path get/set/has over nested maps
//! - [`flatten`] - Conversion between nested maps and dotted-key maps
//! - [`diff`] - Structural difference of two maps
//! - [`merge`] - Structural merge with options and `-=key` deletion markers
//! - [`version`] - Comparison of dot-separated version strings
//! - [`helpers`] - Duplicating, filtering and inverting objects
//! - [`color`] - RGB/HSV/hex color conversions

pub mod color;
pub mod diff;
pub mod error;
pub mod flatten;
pub mod helpers;
pub mod merge;
pub mod path;
pub mod value;
pub mod version;

pub use diff::{diff_object, DiffOptions};
pub use error::{ObjectError, Result};
pub use flatten::{expand_object, flatten_object};
pub use helpers::{duplicate, filter_object, invert_object, FilterOptions};
pub use merge::{merge_object, merge_object_into, MergeOptions, Merger};
pub use path::{get_property, has_property, set_property, DottedPath};
pub use value::{get_type, Map, Value, ValueKind};
pub use version::is_newer_version;
