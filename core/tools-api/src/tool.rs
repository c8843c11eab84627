//! Static descriptor of a tool.

use serde::Deserialize;
use serde::Serialize;

/// Capabilities and naming of a registered tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub display_name: String,
    /// The tool streams live output while it runs.
    #[serde(default)]
    pub can_update_output: bool,
    /// Output should be rendered as markdown.
    #[serde(default)]
    pub is_output_markdown: bool,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            can_update_output: false,
            is_output_markdown: false,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_live_output(mut self) -> Self {
        self.can_update_output = true;
        self
    }

    pub fn with_markdown_output(mut self) -> Self {
        self.is_output_markdown = true;
        self
    }
}
