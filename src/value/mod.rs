//! Value module - In-memory representation of YAML/JSON objects.
//!
//! This module provides the structural value model every helper operates on.

mod value;

pub use value::*;
