//! Image-map `area` eligibility.

use tabstop_protocols::{DocumentScope, ElementQueryProvider, NodeId};

use crate::decision::FocusDecision;
use crate::visibility::is_visible;

/// An area is reachable only through a visible image that uses its
/// enclosing named map.
pub(crate) fn check<T, D>(tree: &T, document: &D, area: NodeId) -> Result<(), FocusDecision>
where
    T: ElementQueryProvider + ?Sized,
    D: DocumentScope + ?Sized,
{
    let (_, map) = tree
        .closest(area, "map", "name")
        .ok_or(FocusDecision::AreaOutsideNamedMap)?;
    let map_name = map.attribute("name").unwrap_or_default().to_string();

    let usemap = format!("#{}", map_name);
    let Some(image) = document.query_by_attribute("img", "usemap", &usemap) else {
        return Err(FocusDecision::AreaImageMissing { map_name });
    };

    if !is_visible(&tree.geometry(image)) {
        return Err(FocusDecision::AreaImageHidden { map_name });
    }

    Ok(())
}
