//! `[site]` configuration: metadata shown in page titles and `<head>`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Robonet"
//! description = "Build and deploy agentic trading bots"
//! icon = "/logo.svg"
//! title_template = "%s – Robonet"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the page title in `title_template`.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Site title. May be empty or a placeholder like `" "` when the logo
    /// carries the name.
    pub title: String,

    /// Site description (required).
    pub description: String,

    /// Favicon, URL or path starting with `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub lang: String,

    /// Page title template, e.g. `"%s – Robonet"`.
    #[serde(alias = "titleTemplate", skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: None,
            lang: "en".into(),
            title_template: None,
        }
    }
}

impl SiteMeta {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `description` is set
    /// - `icon` is a valid link target
    /// - `title_template` contains `%s`
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.description.trim().is_empty() {
            diag.error_with_hint(
                path.field("description"),
                "site description is required",
                "set e.g.: description = \"Build and deploy agentic trading bots\"",
            );
        }
        self.validate_optional(path, diag);
    }

    /// Checks that apply to fields whenever they are present.
    pub fn validate_optional(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(icon) = &self.icon {
            check_link(icon, path.field("icon"), diag);
        }
        if let Some(template) = &self.title_template {
            check_title_template(template, path.field("title_template"), diag);
        }
    }

    /// Full `<title>` for a page.
    ///
    /// Without a page title the site title is used as is; without a
    /// template the page title is used as is.
    pub fn page_title(&self, page_title: Option<&str>) -> String {
        match (page_title.filter(|t| !t.trim().is_empty()), &self.title_template) {
            (Some(title), Some(template)) => template.replace(TITLE_PLACEHOLDER, title),
            (Some(title), None) => title.to_string(),
            (None, _) => self.title.trim().to_string(),
        }
    }
}

pub fn check_title_template(template: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !template.contains(TITLE_PLACEHOLDER) {
        diag.error_with_hint(
            field,
            format!("title template '{template}' has no {TITLE_PLACEHOLDER} placeholder"),
            "use format like \"%s – My Docs\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let site = SiteMeta::default();
        assert_eq!(site.lang, "en");
        assert!(site.icon.is_none());
        assert!(site.title_template.is_none());
    }

    #[test]
    fn test_placeholder_title_accepted() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");

        let mut site = config.site.clone();
        site.title = " ".into();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&FieldPath::new("site"), &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_missing_description() {
        let site = SiteMeta::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&FieldPath::new("site"), &mut diag);
        assert!(diag.has_error_at("site.description"));
    }

    #[test]
    fn test_bad_icon_and_template() {
        let site = SiteMeta {
            description: "Docs".into(),
            icon: Some("logo.svg".into()),
            title_template: Some("Robonet".into()),
            ..SiteMeta::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&FieldPath::new("site"), &mut diag);
        assert!(diag.has_error_at("site.icon"));
        assert!(diag.has_error_at("site.title_template"));
    }

    #[test]
    fn test_page_title() {
        let site = SiteMeta {
            title: "Robonet".into(),
            title_template: Some("%s – Robonet".into()),
            ..SiteMeta::default()
        };
        assert_eq!(site.page_title(Some("Quick Start")), "Quick Start – Robonet");
        assert_eq!(site.page_title(None), "Robonet");
        assert_eq!(site.page_title(Some("  ")), "Robonet");

        let plain = SiteMeta {
            title: "Robonet".into(),
            ..SiteMeta::default()
        };
        assert_eq!(plain.page_title(Some("Quick Start")), "Quick Start");
    }
}
