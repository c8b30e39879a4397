//! Capabilities the locator needs from a host element tree.

use crate::types::{ComputedStyle, Element, Geometry, NodeId};

/// Read access to a rendered element tree.
///
/// Implementations answer from a snapshot that stays fixed for the duration
/// of one query. None of the methods may mutate the tree.
pub trait ElementQueryProvider {
    /// Structural facts for a node, or `None` if the handle is not live.
    fn element(&self, id: NodeId) -> Option<Element>;

    /// Parent element, `None` at the top of the tree.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Every descendant of `root` in depth-first document order.
    ///
    /// `root` itself is not included.
    fn descendants(&self, root: NodeId) -> Vec<NodeId>;

    /// Layout geometry. Cheap.
    fn geometry(&self, id: NodeId) -> Geometry;

    /// Resolved style. Potentially expensive; callers should only ask for it
    /// when geometry alone cannot decide.
    fn computed_style(&self, id: NodeId) -> ComputedStyle;

    /// Nearest inclusive ancestor with the given tag that carries `attribute`.
    fn closest(&self, id: NodeId, tag: &str, attribute: &str) -> Option<(NodeId, Element)> {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(element) = self.element(node) {
                if element.is(tag) && element.has_attribute(attribute) {
                    return Some((node, element));
                }
            }
            current = self.parent(node);
        }
        None
    }
}

/// Document-wide lookups.
///
/// This is the one place a query reaches outside its container, so it is
/// handed to the locator as its own input.
pub trait DocumentScope {
    /// First element in document order with tag `tag` whose `attribute`
    /// equals `value` exactly.
    fn query_by_attribute(&self, tag: &str, attribute: &str, value: &str) -> Option<NodeId>;
}

impl<T: ElementQueryProvider + ?Sized> ElementQueryProvider for &T {
    fn element(&self, id: NodeId) -> Option<Element> {
        (**self).element(id)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        (**self).parent(id)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        (**self).descendants(root)
    }

    fn geometry(&self, id: NodeId) -> Geometry {
        (**self).geometry(id)
    }

    fn computed_style(&self, id: NodeId) -> ComputedStyle {
        (**self).computed_style(id)
    }
}

impl<T: DocumentScope + ?Sized> DocumentScope for &T {
    fn query_by_attribute(&self, tag: &str, attribute: &str, value: &str) -> Option<NodeId> {
        (**self).query_by_attribute(tag, attribute, value)
    }
}
