use super::*;

#[test]
fn test_element_new_lowercases_tag() {
    let el = Element::new("BUTTON");
    assert_eq!(el.tag_name, "button");
    assert!(el.is("button"));
    assert!(el.is("Button"));
}

#[test]
fn test_element_attributes() {
    let el = Element::new("a").with_attribute("HREF", "/home");
    assert!(el.has_attribute("href"));
    assert_eq!(el.attribute("href"), Some("/home"));
    assert_eq!(el.attribute("title"), None);
}

#[test]
fn test_element_display() {
    let el = Element::new("input")
        .with_attribute("type", "text")
        .with_attribute("disabled", "");
    assert_eq!(el.to_string(), "<input disabled type=\"text\">");
}

#[test]
fn test_node_id_display() {
    assert_eq!(NodeId(7).to_string(), "#7");
}

#[test]
fn test_node_id_serialization() {
    let json = serde_json::to_string(&NodeId(3)).unwrap();
    assert_eq!(json, "3");

    let parsed: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, NodeId(3));
}
