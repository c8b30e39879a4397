//! Serialized snapshot schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabstop_protocols::{ComputedStyle, Geometry};

/// Top-level snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub root: Option<SnapshotNode>,
}

/// One element and its subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub tag: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub geometry: Geometry,

    #[serde(default)]
    pub style: ComputedStyle,

    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}
