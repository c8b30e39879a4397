//! The focusable element locator.

use tabstop_protocols::{DocumentScope, ElementQueryProvider, LocatorError, NodeId, SearchOptions};
use tracing::{debug, trace};

use crate::decision::{self, FocusDecision};
use crate::scrollable;

/// Finds focusable elements in a host tree.
///
/// Holds only borrows; every call reads the tree afresh, so results always
/// reflect the tree at call time.
pub struct FocusableLocator<'a, T: ?Sized, D: ?Sized> {
    tree: &'a T,
    document: &'a D,
}

impl<'a, T, D> FocusableLocator<'a, T, D>
where
    T: ElementQueryProvider + ?Sized,
    D: DocumentScope + ?Sized,
{
    pub fn new(tree: &'a T, document: &'a D) -> Self {
        Self { tree, document }
    }

    /// All focusable elements under `container`, in document order.
    ///
    /// Scrollable regions (when requested) follow the primary list and may
    /// repeat elements already in it.
    ///
    /// # Errors
    ///
    /// [`LocatorError::InvalidArgument`] if `container` is not a live element.
    pub fn find(&self, container: NodeId, options: SearchOptions) -> Result<Vec<NodeId>, LocatorError> {
        if self.tree.element(container).is_none() {
            return Err(LocatorError::missing_container(container));
        }

        let descendants = self.tree.descendants(container);
        let mut focusable = Vec::new();

        for &id in &descendants {
            let Some(element) = self.tree.element(id) else {
                continue;
            };
            match decision::decide(self.tree, self.document, id, &element) {
                FocusDecision::Focusable { rule } => {
                    trace!(node = %id, rule = rule.selector(), "Focusable");
                    focusable.push(id);
                }
                FocusDecision::NotCandidate => {}
                rejected => trace!(node = %id, reason = %rejected, "Candidate rejected"),
            }
        }

        let primary = focusable.len();
        if options.include_scrollable {
            focusable.extend(scrollable::scrollable_regions(self.tree, &descendants));
        }

        debug!(
            container = %container,
            scanned = descendants.len(),
            primary,
            scrollable = focusable.len() - primary,
            "Focusable search complete"
        );
        Ok(focusable)
    }

    /// Verdict for a single element, independent of any container.
    pub fn explain(&self, id: NodeId) -> Result<FocusDecision, LocatorError> {
        let element = self.tree.element(id).ok_or_else(|| {
            LocatorError::InvalidArgument(format!("{} is not an element in the tree", id))
        })?;
        Ok(decision::decide(self.tree, self.document, id, &element))
    }
}

/// All focusable elements under `container`. See [`FocusableLocator::find`].
pub fn find<T, D>(
    tree: &T,
    document: &D,
    container: NodeId,
    options: SearchOptions,
) -> Result<Vec<NodeId>, LocatorError>
where
    T: ElementQueryProvider + ?Sized,
    D: DocumentScope + ?Sized,
{
    FocusableLocator::new(tree, document).find(container, options)
}
