//! Subcommand handlers.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use tabstop_config::{Config, ConfigValidator, OutputFormat, ValidationResult};
use tabstop_core::{FocusDecision, FocusableLocator};
use tabstop_protocols::{Element, ElementQueryProvider, NodeId};
use tabstop_tree_snapshot::SnapshotTree;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// One row of `find` output.
#[derive(Debug, Serialize)]
struct FoundElement {
    node: NodeId,
    label: String,
    element: Element,
}

#[derive(Debug, Serialize)]
struct Inspection {
    node: NodeId,
    label: String,
    #[serde(flatten)]
    decision: FocusDecision,
}

fn resolve_format(config: &Config, flag: Option<&str>) -> Result<OutputFormat, Box<dyn std::error::Error>> {
    match flag {
        Some(value) => Ok(value.parse()?),
        None => Ok(config.output.format),
    }
}

pub(crate) fn run_find(
    config: &Config,
    snapshot: &Path,
    root: Option<&str>,
    include_scrollable: bool,
    format: Option<&str>,
) -> CommandResult {
    let format = resolve_format(config, format)?;
    let tree = SnapshotTree::load(snapshot)?;
    let container = match root {
        Some(id) => tree.lookup_id(id)?,
        None => tree.root(),
    };

    let mut options = config.search.options();
    if include_scrollable {
        options.include_scrollable = true;
    }

    let found = FocusableLocator::new(&tree, &tree).find(container, options)?;
    info!(
        container = %tree.label(container),
        count = found.len(),
        include_scrollable = options.include_scrollable,
        "Found focusable elements"
    );

    print!("{}", render_found(&tree, &found, format)?);
    Ok(())
}

pub(crate) fn run_inspect(
    config: &Config,
    snapshot: &Path,
    element: &str,
    format: Option<&str>,
) -> CommandResult {
    let format = resolve_format(config, format)?;
    let tree = SnapshotTree::load(snapshot)?;
    let node = tree.lookup_id(element)?;
    let decision = FocusableLocator::new(&tree, &tree).explain(node)?;

    let inspection = Inspection {
        node,
        label: tree.label(node),
        decision,
    };
    print!("{}", render_inspection(&inspection, format)?);
    Ok(())
}

pub(crate) fn run_check_config(config: &Config, path: &Path) -> CommandResult {
    let result = ConfigValidator::validate(config)?;
    print!("{}", render_validation(path, &result));

    if result.is_valid() {
        Ok(())
    } else {
        warn!(errors = result.errors.len(), "Configuration is invalid");
        Err(format!("{} has {} error(s)", path.display(), result.errors.len()).into())
    }
}

fn render_found(
    tree: &SnapshotTree,
    found: &[NodeId],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let rows: Vec<FoundElement> = found
        .iter()
        .filter_map(|&node| {
            tree.element(node).map(|element| FoundElement {
                node,
                label: tree.label(node),
                element,
            })
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?)),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok("No focusable elements.\n".to_string());
            }
            let mut output = String::new();
            for (i, row) in rows.iter().enumerate() {
                output.push_str(&format!("{:>3}  {:<6} {}\n", i, row.node.to_string(), row.element));
            }
            Ok(output)
        }
    }
}

fn render_inspection(inspection: &Inspection, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(inspection)?)),
        OutputFormat::Table => Ok(format!("{}: {}\n", inspection.label, inspection.decision)),
    }
}

fn render_validation(path: &Path, result: &ValidationResult) -> String {
    let mut output = String::new();
    for error in &result.errors {
        output.push_str(&format!("error: {}: {}\n", error.path, error.message));
    }
    for warning in &result.warnings {
        output.push_str(&format!("warning: {}: {}\n", warning.path, warning.message));
    }
    if result.is_valid() {
        output.push_str(&format!("{}: ok\n", path.display()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tabstop_config::{ValidationError, ValidationWarning};
    use tempfile::NamedTempFile;

    fn toolbar() -> SnapshotTree {
        SnapshotTree::from_json_value(json!({
            "root": {
                "tag": "div",
                "attributes": { "id": "toolbar" },
                "children": [
                    { "tag": "button", "attributes": { "id": "bold" },
                      "geometry": { "offset_width": 24, "offset_height": 24 } },
                    { "tag": "button", "attributes": { "id": "ghost" } }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_render_found_table() {
        let tree = toolbar();
        let output = render_found(&tree, &[NodeId(1)], OutputFormat::Table).unwrap();
        assert!(output.contains("#1"));
        assert!(output.contains("<button id=\"bold\">"));
    }

    #[test]
    fn test_render_found_empty_table() {
        let tree = toolbar();
        let output = render_found(&tree, &[], OutputFormat::Table).unwrap();
        assert_eq!(output, "No focusable elements.\n");
    }

    #[test]
    fn test_render_found_json() {
        let tree = toolbar();
        let output = render_found(&tree, &[NodeId(1)], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["node"], 1);
        assert_eq!(parsed[0]["label"], "button#bold");
        assert_eq!(parsed[0]["element"]["tag_name"], "button");
    }

    #[test]
    fn test_render_inspection_json_is_flat() {
        let inspection = Inspection {
            node: NodeId(2),
            label: "button#ghost".to_string(),
            decision: FocusDecision::Hidden,
        };
        let output = render_inspection(&inspection, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["verdict"], "hidden");
        assert_eq!(parsed["label"], "button#ghost");
    }

    #[test]
    fn test_render_inspection_table() {
        let inspection = Inspection {
            node: NodeId(2),
            label: "button#ghost".to_string(),
            decision: FocusDecision::Hidden,
        };
        let output = render_inspection(&inspection, OutputFormat::Table).unwrap();
        assert!(output.starts_with("button#ghost: hidden"));
    }

    #[test]
    fn test_render_validation() {
        let mut result = ValidationResult::default();
        result.add_warning(ValidationWarning::new("search.include_scrollable", "slow"));
        let output = render_validation(Path::new("tabstop.toml"), &result);
        assert!(output.contains("warning: search.include_scrollable: slow"));
        assert!(output.ends_with("tabstop.toml: ok\n"));

        result.add_error(ValidationError::new("logging.level", "bad"));
        let output = render_validation(Path::new("tabstop.toml"), &result);
        assert!(output.contains("error: logging.level: bad"));
        assert!(!output.contains(": ok"));
    }

    #[test]
    fn test_run_check_config_rejects_bad_directive() {
        let mut config = Config::default();
        config.logging.level = "tabstop[=debug".to_string();
        assert!(run_check_config(&config, Path::new("tabstop.toml")).is_err());

        config.logging.level = "tabstop_core".to_string();
        assert!(run_check_config(&config, Path::new("tabstop.toml")).is_ok());
    }

    #[test]
    fn test_resolve_format_flag_overrides_config() {
        let config = Config::default();
        assert_eq!(resolve_format(&config, None).unwrap(), OutputFormat::Table);
        assert_eq!(resolve_format(&config, Some("json")).unwrap(), OutputFormat::Json);
        assert!(resolve_format(&config, Some("yaml")).is_err());
    }

    #[test]
    fn test_run_find_unknown_root() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "root": {{ "tag": "body" }} }}"#).unwrap();
        let result = run_find(&Config::default(), file.path(), Some("nope"), false, None);
        assert!(result.is_err());
    }
}
