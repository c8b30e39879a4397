//! Scrollable-region detection.
//!
//! Some engines make any scroll container focusable. Finding them needs a
//! style lookup per element, so the geometry test runs first and style is
//! only resolved for elements that actually overflow.

use tabstop_protocols::{ElementQueryProvider, Geometry, NodeId};
use tracing::trace;

pub(crate) fn has_scroll_overflow(geometry: &Geometry) -> bool {
    geometry.scroll_height > geometry.client_height
}

/// Elements among `nodes` that overflow vertically and clip the overflow.
pub(crate) fn scrollable_regions<T>(tree: &T, nodes: &[NodeId]) -> Vec<NodeId>
where
    T: ElementQueryProvider + ?Sized,
{
    nodes
        .iter()
        .copied()
        .filter(|&id| {
            if !has_scroll_overflow(&tree.geometry(id)) {
                return false;
            }
            let overflow = tree.computed_style(id).overflow;
            trace!(node = %id, ?overflow, "Overflowing element");
            overflow.clips()
        })
        .collect()
}
