//! `[markdown]` configuration.
//!
//! ```toml
//! [markdown.theme]
//! light = "github-light"
//! dark = "github-dark"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Code block highlight themes.
    pub theme: CodeTheme,
}

/// Highlight theme per color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeTheme {
    pub light: String,
    pub dark: String,
}

impl Default for CodeTheme {
    fn default() -> Self {
        Self {
            light: "github-light".into(),
            dark: "github-dark".into(),
        }
    }
}

impl MarkdownConfig {
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let theme = path.field("theme");
        if self.theme.light.trim().is_empty() {
            diag.error(theme.field("light"), "highlight theme name is empty");
        }
        if self.theme.dark.trim().is_empty() {
            diag.error(theme.field("dark"), "highlight theme name is empty");
        }
    }
}
