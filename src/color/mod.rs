//! Color module - conversions between RGB, HSV and hex colors.

mod color;

pub use color::*;
