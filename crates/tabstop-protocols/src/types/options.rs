//! Query options.

use serde::{Deserialize, Serialize};

/// Options for a focusable-element search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Also return elements that form a scrollable region. Every element
    /// under the container is inspected, so keep the container narrow.
    #[serde(default)]
    pub include_scrollable: bool,
}

impl SearchOptions {
    pub fn with_scrollable(mut self, include: bool) -> Self {
        self.include_scrollable = include;
        self
    }
}
