//! Computed style values consulted by the locator.

use serde::{Deserialize, Serialize};

/// Host-reported `display` value, kept so snapshots round-trip. The locator
/// judges visibility from geometry alone and never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    Flex,
    Grid,
    Contents,
    None,
}

/// Host-reported `visibility` value. Like [`Display`], informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// How a box handles content that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// Whether the box clips its content instead of letting it spill out.
    pub fn clips(self) -> bool {
        !matches!(self, Overflow::Visible)
    }
}

/// Resolved style for one element. Obtaining this is expensive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComputedStyle {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub overflow: Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_clips() {
        assert!(!Overflow::Visible.clips());
        assert!(Overflow::Hidden.clips());
        assert!(Overflow::Clip.clips());
        assert!(Overflow::Scroll.clips());
        assert!(Overflow::Auto.clips());
    }

    #[test]
    fn test_style_defaults() {
        let style = ComputedStyle::default();
        assert_eq!(style.display, Display::Inline);
        assert_eq!(style.visibility, Visibility::Visible);
        assert_eq!(style.overflow, Overflow::Visible);
    }

    #[test]
    fn test_style_deserialization() {
        let style: ComputedStyle =
            serde_json::from_str(r#"{"display":"inline-block","overflow":"auto"}"#).unwrap();
        assert_eq!(style.display, Display::InlineBlock);
        assert_eq!(style.visibility, Visibility::Visible);
        assert_eq!(style.overflow, Overflow::Auto);
    }
}
