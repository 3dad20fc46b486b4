//! Merge module - structural merge of nested maps.
//!
//! This module applies a partial update object to an original map, with
//! options for key insertion, overwriting, recursion and type enforcement,
//! plus support for `-=key` deletion markers.

mod merger;
mod options;


pub use merger::*;
pub use options::*;
