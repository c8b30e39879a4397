//! Loading snapshots from disk.

use std::io::Write;
use std::path::Path;

use tabstop_protocols::{ElementQueryProvider, NodeId};
use tabstop_tree_snapshot::{SnapshotError, SnapshotTree};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "root": {{ "tag": "form", "children": [ {{ "tag": "input", "attributes": {{ "type": "text" }} }} ] }} }}"#
    )
    .unwrap();

    let tree = SnapshotTree::load(file.path()).unwrap();
    assert_eq!(tree.len(), 2);
    let input = tree.element(NodeId(1)).unwrap();
    assert_eq!(input.attribute("type"), Some("text"));
}

#[test]
fn test_load_nonexistent_file() {
    let result = SnapshotTree::load(Path::new("/nonexistent/path/snapshot.json"));
    assert!(matches!(result, Err(SnapshotError::Io(_))));
}
