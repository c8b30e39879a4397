//! Per-element focusability verdicts.

use std::fmt;

use serde::Serialize;
use tabstop_protocols::{DocumentScope, Element, ElementQueryProvider, NodeId};

use crate::area;
use crate::selector::CandidateRule;
use crate::visibility::is_visible;

/// Why an element is, or is not, focusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum FocusDecision {
    Focusable { rule: CandidateRule },
    NotCandidate,
    Hidden,
    AreaOutsideNamedMap,
    AreaImageMissing { map_name: String },
    AreaImageHidden { map_name: String },
}

impl FocusDecision {
    pub fn is_focusable(&self) -> bool {
        matches!(self, FocusDecision::Focusable { .. })
    }
}

impl fmt::Display for FocusDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusDecision::Focusable { rule } => write!(f, "focusable (matches {})", rule.selector()),
            FocusDecision::NotCandidate => write!(f, "not a focus candidate"),
            FocusDecision::Hidden => write!(f, "hidden (no rendered box or client rects)"),
            FocusDecision::AreaOutsideNamedMap => write!(f, "area is not inside a named map"),
            FocusDecision::AreaImageMissing { map_name } => {
                write!(f, "no image uses map \"#{}\"", map_name)
            }
            FocusDecision::AreaImageHidden { map_name } => {
                write!(f, "image using map \"#{}\" is hidden", map_name)
            }
        }
    }
}

/// Judge one element. `element` must be the structural facts of `id`.
pub(crate) fn decide<T, D>(tree: &T, document: &D, id: NodeId, element: &Element) -> FocusDecision
where
    T: ElementQueryProvider + ?Sized,
    D: DocumentScope + ?Sized,
{
    let Some(rule) = CandidateRule::matching(element) else {
        return FocusDecision::NotCandidate;
    };

    // Areas have no box of their own; the image using their map decides.
    if element.is("area") {
        return match area::check(tree, document, id) {
            Ok(()) => FocusDecision::Focusable { rule },
            Err(rejection) => rejection,
        };
    }

    if !is_visible(&tree.geometry(id)) {
        return FocusDecision::Hidden;
    }

    FocusDecision::Focusable { rule }
}
