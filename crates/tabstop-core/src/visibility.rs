//! Rendered-extent check.

use tabstop_protocols::Geometry;

/// Whether the element occupies any rendered space: a non-zero border box,
/// or at least one client rect (inline content that wraps can have a zero
/// box and still be rendered).
pub fn is_visible(geometry: &Geometry) -> bool {
    geometry.offset_width > 0.0 || geometry.offset_height > 0.0 || !geometry.client_rects.is_empty()
}
