//! In-memory element tree for tabstop.
//!
//! Loads a layout snapshot (element structure, geometry and computed style
//! captured from a rendering engine) and serves it through the
//! [`ElementQueryProvider`] and [`DocumentScope`] capabilities.
//!
//! ## Snapshot format
//!
//! ```json
//! {
//!   "root": {
//!     "tag": "body",
//!     "geometry": { "offset_width": 800, "offset_height": 600 },
//!     "children": [
//!       { "tag": "button", "attributes": { "id": "save" },
//!         "geometry": { "offset_width": 80, "offset_height": 24 } },
//!       { "tag": "div", "style": { "overflow": "auto" },
//!         "geometry": { "client_height": 100, "scroll_height": 400 } }
//!     ]
//!   }
//! }
//! ```
//!
//! Every field except `tag` is optional and defaults to empty or zero.
//!
//! [`ElementQueryProvider`]: tabstop_protocols::ElementQueryProvider
//! [`DocumentScope`]: tabstop_protocols::DocumentScope

mod error;
mod snapshot;
mod tree;

pub use error::SnapshotError;
pub use snapshot::{SnapshotDocument, SnapshotNode};
pub use tree::SnapshotTree;
