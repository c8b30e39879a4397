//! Arena-backed element tree.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use tabstop_protocols::{
    ComputedStyle, DocumentScope, Element, ElementQueryProvider, Geometry, NodeId,
};
use tracing::debug;

use crate::error::SnapshotError;
use crate::snapshot::{SnapshotDocument, SnapshotNode};

#[derive(Debug)]
struct ArenaNode {
    element: Element,
    geometry: Geometry,
    style: ComputedStyle,
    parent: Option<NodeId>,
    /// One past the last arena index of this node's subtree.
    subtree_end: usize,
}

/// Element tree stored in pre-order, so arena index equals document order
/// and every subtree is a contiguous range.
#[derive(Debug)]
pub struct SnapshotTree {
    nodes: Vec<ArenaNode>,
    style_lookups: Cell<usize>,
}

impl SnapshotTree {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        let tree = Self::from_json_str(&content)?;
        debug!(path = %path.display(), nodes = tree.len(), "Loaded tree snapshot");
        Ok(tree)
    }

    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(content)?;
        Self::from_document(document)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    pub fn from_document(document: SnapshotDocument) -> Result<Self, SnapshotError> {
        let root = document.root.ok_or(SnapshotError::EmptyDocument)?;
        let mut nodes = Vec::new();
        flatten(&mut nodes, root, None, "root".to_string())?;
        Ok(Self {
            nodes,
            style_lookups: Cell::new(0),
        })
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an element by its `id` attribute.
    pub fn lookup_id(&self, id: &str) -> Result<NodeId, SnapshotError> {
        self.nodes
            .iter()
            .position(|node| node.element.attribute("id") == Some(id))
            .map(NodeId)
            .ok_or_else(|| SnapshotError::UnknownNode(id.to_string()))
    }

    /// Short human-readable name, e.g. `button#save` or `div[4]`.
    pub fn label(&self, id: NodeId) -> String {
        match self.nodes.get(id.0) {
            Some(node) => match node.element.attribute("id") {
                Some(html_id) => format!("{}#{}", node.element.tag_name, html_id),
                None => format!("{}[{}]", node.element.tag_name, id.0),
            },
            None => format!("?{}", id),
        }
    }

    /// Number of `computed_style` calls served since creation or the last
    /// reset.
    pub fn style_lookups(&self) -> usize {
        self.style_lookups.get()
    }

    pub fn reset_style_lookups(&self) {
        self.style_lookups.set(0);
    }
}

fn flatten(
    nodes: &mut Vec<ArenaNode>,
    node: SnapshotNode,
    parent: Option<NodeId>,
    path: String,
) -> Result<(), SnapshotError> {
    if node.tag.trim().is_empty() {
        return Err(SnapshotError::InvalidNode {
            path,
            message: "tag must not be empty".to_string(),
        });
    }

    let index = nodes.len();
    let mut element = Element::new(node.tag.trim());
    for (name, value) in node.attributes {
        element = element.with_attribute(name, value);
    }
    nodes.push(ArenaNode {
        element,
        geometry: node.geometry,
        style: node.style,
        parent,
        subtree_end: index + 1,
    });

    for (i, child) in node.children.into_iter().enumerate() {
        flatten(nodes, child, Some(NodeId(index)), format!("{}/{}", path, i))?;
    }
    nodes[index].subtree_end = nodes.len();
    Ok(())
}

impl ElementQueryProvider for SnapshotTree {
    fn element(&self, id: NodeId) -> Option<Element> {
        self.nodes.get(id.0).map(|node| node.element.clone())
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        match self.nodes.get(root.0) {
            Some(node) => (root.0 + 1..node.subtree_end).map(NodeId).collect(),
            None => Vec::new(),
        }
    }

    fn geometry(&self, id: NodeId) -> Geometry {
        self.nodes
            .get(id.0)
            .map(|node| node.geometry.clone())
            .unwrap_or_default()
    }

    fn computed_style(&self, id: NodeId) -> ComputedStyle {
        self.style_lookups.set(self.style_lookups.get() + 1);
        self.nodes
            .get(id.0)
            .map(|node| node.style.clone())
            .unwrap_or_default()
    }
}

impl DocumentScope for SnapshotTree {
    fn query_by_attribute(&self, tag: &str, attribute: &str, value: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.element.is(tag) && node.element.attribute(attribute) == Some(value))
            .map(NodeId)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
