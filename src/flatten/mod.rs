//! Flatten module - nested maps to dotted keys and back.

mod flatten;

pub use flatten::*;
