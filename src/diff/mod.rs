//! Diff module - structural comparison of nested maps.

mod diff;

pub use diff::*;
