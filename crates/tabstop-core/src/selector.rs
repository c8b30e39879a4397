//! Structural candidate rules.

use serde::{Deserialize, Serialize};
use tabstop_protocols::Element;

/// One structural pattern that makes an element a focus candidate.
///
/// Rules are checked in declaration order; the first match is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateRule {
    TabIndex,
    Link,
    Button,
    Input,
    Select,
    TextArea,
    Iframe,
    Object,
    Embed,
    Area,
    ContentEditable,
}

impl CandidateRule {
    pub const ALL: [CandidateRule; 11] = [
        CandidateRule::TabIndex,
        CandidateRule::Link,
        CandidateRule::Button,
        CandidateRule::Input,
        CandidateRule::Select,
        CandidateRule::TextArea,
        CandidateRule::Iframe,
        CandidateRule::Object,
        CandidateRule::Embed,
        CandidateRule::Area,
        CandidateRule::ContentEditable,
    ];

    /// First rule the element satisfies, if any.
    pub fn matching(element: &Element) -> Option<CandidateRule> {
        Self::ALL.into_iter().find(|rule| rule.matches(element))
    }

    pub fn matches(self, element: &Element) -> bool {
        match self {
            CandidateRule::TabIndex => element.has_attribute("tabindex"),
            CandidateRule::Link => element.is("a") && element.has_attribute("href"),
            CandidateRule::Button => element.is("button") && !is_disabled(element),
            CandidateRule::Input => {
                element.is("input")
                    && !element
                        .attribute("type")
                        .is_some_and(|kind| kind.eq_ignore_ascii_case("hidden"))
                    && !is_disabled(element)
            }
            CandidateRule::Select => element.is("select") && !is_disabled(element),
            CandidateRule::TextArea => element.is("textarea") && !is_disabled(element),
            CandidateRule::Iframe => element.is("iframe"),
            CandidateRule::Object => element.is("object"),
            CandidateRule::Embed => element.is("embed"),
            CandidateRule::Area => element.is("area") && element.has_attribute("href"),
            CandidateRule::ContentEditable => element
                .attribute("contenteditable")
                .is_some_and(|value| value != "false"),
        }
    }

    /// CSS selector equivalent, for diagnostics.
    pub fn selector(self) -> &'static str {
        match self {
            CandidateRule::TabIndex => "[tabindex]",
            CandidateRule::Link => "a[href]",
            CandidateRule::Button => "button:not([disabled])",
            CandidateRule::Input => "input:not([type=\"hidden\"]):not([disabled])",
            CandidateRule::Select => "select:not([disabled])",
            CandidateRule::TextArea => "textarea:not([disabled])",
            CandidateRule::Iframe => "iframe",
            CandidateRule::Object => "object",
            CandidateRule::Embed => "embed",
            CandidateRule::Area => "area[href]",
            CandidateRule::ContentEditable => "[contenteditable]:not([contenteditable=false])",
        }
    }
}

fn is_disabled(element: &Element) -> bool {
    element.has_attribute("disabled")
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
