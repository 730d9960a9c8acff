//! `[search]` configuration: search provider selection.
//!
//! ```toml
//! [search]
//! provider = "local"
//! ```
//!
//! ```toml
//! [search]
//! provider = "algolia"
//! app_id = "R2IYF7ETH7"
//! api_key = "599cec31baffa4868cae4e79f180729b"
//! index_name = "docs"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// In-browser index built from page content.
    Local,
    /// Hosted DocSearch index.
    Algolia {
        app_id: String,
        /// Search-only API key (public).
        api_key: String,
        index_name: String,
    },
}

impl SearchConfig {
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia { .. } => "algolia",
        }
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Self::Algolia {
            app_id,
            api_key,
            index_name,
        } = self
        {
            for (name, value) in [
                ("app_id", app_id),
                ("api_key", api_key),
                ("index_name", index_name),
            ] {
                if value.trim().is_empty() {
                    diag.error(
                        path.field(name),
                        format!("{name} is required for the algolia provider"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_local_provider() {
        let config = test_parse_config("[search]\nprovider = \"local\"\n");
        assert_eq!(config.search, Some(SearchConfig::Local));
        assert_eq!(config.search.unwrap().provider(), "local");
    }

    #[test]
    fn test_algolia_provider() {
        let config = test_parse_config(
            "[search]\nprovider = \"algolia\"\napp_id = \"APP\"\napi_key = \"KEY\"\nindex_name = \"docs\"\n",
        );
        assert!(matches!(
            config.search,
            Some(SearchConfig::Algolia { ref index_name, .. }) if index_name == "docs"
        ));
    }

    #[test]
    fn test_algolia_empty_credentials() {
        let search = SearchConfig::Algolia {
            app_id: "APP".into(),
            api_key: String::new(),
            index_name: " ".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        search.validate(&FieldPath::new("search"), &mut diag);
        assert!(diag.has_error_at("search.api_key"));
        assert!(diag.has_error_at("search.index_name"));
        assert!(!diag.has_error_at("search.app_id"));
    }
}
