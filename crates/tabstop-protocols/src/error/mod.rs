//! Error types for the tabstop protocol layer.

mod locator;

pub use locator::*;
