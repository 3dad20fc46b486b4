//! Helpers module - cloning, filtering and inverting objects.

mod helpers;

pub use helpers::*;
