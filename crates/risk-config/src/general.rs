//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default output format for CLI commands.
fn default_format() -> String {
    String::from("json")
}

const fn default_table_color() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Whether table output may use ANSI colors on a terminal.
    #[serde(default = "default_table_color")]
    pub table_color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            table_color: default_table_color(),
        }
    }
}

impl GeneralConfig {
    /// Whether `default_format` names a supported output format.
    #[must_use]
    pub fn has_known_format(&self) -> bool {
        matches!(self.default_format.as_str(), "json" | "table" | "raw")
    }
}
