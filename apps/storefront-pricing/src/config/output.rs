//! Report output configuration for the command-line tool.

use serde::{Deserialize, Serialize};

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format (`text` or `json`).
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl OutputConfig {
    /// Returns true if reports should be written as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

fn default_output_format() -> String {
    "text".to_string()
}
