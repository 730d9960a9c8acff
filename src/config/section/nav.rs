//! `nav` configuration: the top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[nav]]
//! text = "Community"
//! items = [
//!     { text = "Discord", link = "https://discord.gg/robonet" },
//!     { text = "GitHub", link = "https://github.com/robonet-tech" },
//! ]
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single link with display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    /// Absolute URL or a path starting with `/`.
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        check_link(&self.link, path.field("link"), diag);
    }
}

/// A titled group of links. Groups hold links only, never other groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub text: String,
    pub items: Vec<NavLink>,
}

impl NavGroup {
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.items.is_empty() {
            diag.warn(path.clone(), format!("nav group '{}' has no items", self.text));
        }
        validate_links(&self.items, &path.field("items"), diag);
    }
}

/// Entry of the navigation bar.
///
/// Read as a plain table so unknown keys surface as warnings; an entry
/// carries either `link` or `items`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NavEntry", into = "NavEntry")]
pub enum NavItem {
    Group(NavGroup),
    Link(NavLink),
}

#[derive(Serialize, Deserialize)]
struct NavEntry {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<NavLink>>,
}

impl TryFrom<NavEntry> for NavItem {
    type Error = String;

    fn try_from(entry: NavEntry) -> Result<Self, Self::Error> {
        match (entry.link, entry.items) {
            (Some(link), None) => Ok(Self::Link(NavLink {
                text: entry.text,
                link,
            })),
            (None, Some(items)) => Ok(Self::Group(NavGroup {
                text: entry.text,
                items,
            })),
            (Some(_), Some(_)) => Err(format!(
                "nav entry '{}' has both `link` and `items`, use one of them",
                entry.text
            )),
            (None, None) => Err(format!(
                "nav entry '{}' needs a `link` or a list of `items`",
                entry.text
            )),
        }
    }
}

impl From<NavItem> for NavEntry {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Link(link) => Self {
                text: link.text,
                link: Some(link.link),
                items: None,
            },
            NavItem::Group(group) => Self {
                text: group.text,
                link: None,
                items: Some(group.items),
            },
        }
    }
}

impl NavItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Link(link) => &link.text,
        }
    }

    /// All links reachable from this item, in display order.
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Group(group) => &group.items,
            Self::Link(link) => std::slice::from_ref(link),
        }
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Group(group) => group.validate(path, diag),
            Self::Link(link) => link.validate(path, diag),
        }
    }
}

impl From<NavLink> for NavItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavGroup> for NavItem {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

/// Validate every link of a list, indexing field paths.
pub fn validate_links(links: &[NavLink], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        link.validate(&path.index(i), diag);
    }
}

/// Validate the whole navigation bar.
pub fn validate_nav(items: &[NavItem], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        item.validate(&path.index(i), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigError, SourceFormat, ThemeConfig, test_config_source, test_parse_config,
    };

    #[test]
    fn test_nav_defaults_empty() {
        let config = test_parse_config("");
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_nav_links_and_groups() {
        let config = test_parse_config(
            r#"
[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "Community"
items = [
    { text = "Discord", link = "https://discord.gg/robonet" },
    { text = "GitHub", link = "https://github.com/robonet-tech" },
]
"#,
        );
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0], NavItem::Link(NavLink::new("Guide", "/guide/")));

        match &config.nav[1] {
            NavItem::Group(group) => {
                assert_eq!(group.text, "Community");
                assert_eq!(group.items.len(), 2);
            }
            other => panic!("expected group, got {other:?}"),
        }
        assert_eq!(config.nav[1].links().len(), 2);
        assert_eq!(config.nav[0].links()[0].link, "/guide/");
    }

    #[test]
    fn test_nested_group_rejected() {
        let result = ThemeConfig::from_str(
            &test_config_source(
                r#"
[[nav]]
text = "Outer"
items = [{ text = "Inner", items = [{ text = "x", link = "/x" }] }]
"#,
            ),
            SourceFormat::Toml,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_link_paths() {
        let items = vec![
            NavItem::Link(NavLink::new("Ok", "/ok")),
            NavItem::Group(NavGroup {
                text: "Group".into(),
                items: vec![NavLink::new("Ok", "/a"), NavLink::new("Bad", "relative")],
            }),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&items, &FieldPath::new("nav"), &mut diag);

        assert_eq!(diag.len(), 1);
        assert!(diag.has_error_at("nav[1].items[1].link"));
    }

    #[test]
    fn test_empty_group_warns() {
        let group = NavGroup {
            text: "Empty".into(),
            items: Vec::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        group.validate(&FieldPath::new("nav[0]"), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_link_and_items_rejected() {
        let source = test_config_source(
            "[[nav]]\ntext = \"G\"\nlink = \"\"\nitems = [{ text = \"a\", link = \"/a\" }]\n",
        );
        let err = ThemeConfig::from_str(&source, SourceFormat::Toml).unwrap_err();
        match err {
            ConfigError::Toml(e) => assert!(e.to_string().contains("both `link` and `items`")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_without_link_or_items_rejected() {
        let source = test_config_source("[[nav]]\ntext = \"Lonely\"\n");
        let result = ThemeConfig::from_str(&source, SourceFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_nav_keys_warn() {
        let source = test_config_source(
            r#"
[[nav]]
text = "Guide"
link = "/guide/"
activeMatch = "/guide/"

[[nav]]
text = "Community"
items = [{ text = "Discord", link = "https://discord.gg/robonet", target = "_blank" }]
"#,
        );
        let (config, warnings) = ThemeConfig::parse(&source, SourceFormat::Toml).unwrap();

        assert_eq!(config.nav.len(), 2);
        let fields: Vec<_> = warnings.warnings().iter().map(|(f, _)| f.as_str()).collect();
        assert!(fields.iter().any(|f| f.ends_with("activeMatch")), "{fields:?}");
        assert!(fields.iter().any(|f| f.ends_with("target")), "{fields:?}");
    }
}
