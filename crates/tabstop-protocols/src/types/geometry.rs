//! Layout geometry reported by the host.

use serde::{Deserialize, Serialize};

/// A rendered bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Cheap layout facts for one element.
///
/// Everything here comes straight from layout; nothing requires style
/// resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Width of the element's border box.
    #[serde(default)]
    pub offset_width: f64,

    /// Height of the element's border box.
    #[serde(default)]
    pub offset_height: f64,

    /// Boxes assigned to the element's content, one per line fragment.
    #[serde(default)]
    pub client_rects: Vec<Rect>,

    /// Height of the visible content area.
    #[serde(default)]
    pub client_height: f64,

    /// Height of the full content, including the part scrolled out of view.
    #[serde(default)]
    pub scroll_height: f64,
}
