//! Data types shared between the locator and host trees.

mod element;
mod geometry;
mod options;
mod style;

pub use element::*;
pub use geometry::*;
pub use options::*;
pub use style::*;
