//! `[edit_link]` configuration: "edit this page" links into the docs repository.
//!
//! ```toml
//! [edit_link]
//! pattern = "https://github.com/robonet-tech/docs/edit/main/docs/:path"
//! text = "Edit this page on GitHub"
//! ```

use crate::config::util::check_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the page's source path.
pub const PATH_PLACEHOLDER: &str = ":path";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLinkConfig {
    pub pattern: String,
    pub text: String,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            text: "Edit this page".into(),
        }
    }
}

impl EditLinkConfig {
    /// Edit URL for a page source path such as `guide/quick-start.md`.
    pub fn url_for(&self, page: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, page.trim_start_matches('/'))
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let field = path.field("pattern");
        if !self.pattern.contains(PATH_PLACEHOLDER) {
            diag.error_with_hint(
                field,
                format!("edit link pattern has no {PATH_PLACEHOLDER} placeholder"),
                "use format like https://github.com/org/docs/edit/main/docs/:path",
            );
            return;
        }
        check_absolute_url(&self.url_for("index.md"), field, diag);
    }
}
