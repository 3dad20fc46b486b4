//! Path module - dotted-path get/set/has over nested maps.

mod accessor;
mod dotted;

pub use accessor::*;
pub use dotted::*;
