//! Version module - comparison of dot-separated version strings.

mod version;

pub use version::*;
