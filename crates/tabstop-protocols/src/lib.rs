//! # tabstop Protocols
//!
//! Capability traits the focus locator needs from a host element tree, plus
//! the plain data types that cross that boundary.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`ElementQueryProvider`] - Structural traversal, geometry and computed style
//! - [`DocumentScope`] - Document-wide lookup by attribute

pub mod error;
pub mod provider;
pub mod types;

pub use error::LocatorError;
pub use provider::{DocumentScope, ElementQueryProvider};
pub use types::*;
