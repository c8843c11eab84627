//! Settings handed to invocations that drive a terminal.

use serde::Deserialize;
use serde::Serialize;

/// Terminal settings for shell-backed invocations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShellExecutionConfig {
    /// Terminal width in columns.
    #[serde(default)]
    pub terminal_width: Option<u16>,
    /// Terminal height in rows.
    #[serde(default)]
    pub terminal_height: Option<u16>,
    /// Preserve ANSI color sequences in output.
    #[serde(default)]
    pub show_color: bool,
    /// Pager command exported to child processes.
    #[serde(default = "default_pager")]
    pub pager: String,
}

impl Default for ShellExecutionConfig {
    fn default() -> Self {
        Self {
            terminal_width: None,
            terminal_height: None,
            show_color: false,
            pager: default_pager(),
        }
    }
}

fn default_pager() -> String {
    "cat".to_string()
}
