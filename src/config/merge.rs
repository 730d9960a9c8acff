//! Configuration revisions.
//!
//! A site keeps one base `ThemeConfig` and layers revisions on top of it
//! instead of maintaining near-duplicate copies. A revision is a partial
//! config: every key it sets replaces the base value, lists are replaced
//! as a whole and never merged element by element.
//!
//! ```toml
//! # revision: new footer and a reworked guide sidebar
//! [footer]
//! copyright = "Copyright © 2026 Robonet Finance"
//!
//! [[sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [{ text = "Quick Start", link = "/guide/quick-start" }]
//! ```
//!
//! Sidebar prefixes are the unit of replacement inside `sidebar`: a revision
//! that sets `"/guide/"` swaps that prefix's section list and keeps every
//! other prefix of the base.

use super::section::{validate_head, validate_nav, validate_social_links};
use super::source::{SourceFormat, parse_with_ignored};
use super::util::check_link;
use super::{
    ConfigDiagnostics, ConfigError, EditLinkConfig, FieldPath, FooterConfig, HeadTag,
    MarkdownConfig, NavItem, SearchConfig, SidebarMap, SocialLink, ThemeConfig,
};
use crate::config::section::check_title_template;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Partial `[site]` table of a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(alias = "titleTemplate", skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
}

/// A configuration revision: only the keys it sets take effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarMap>,
    #[serde(alias = "socialLinks", skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Vec<HeadTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownConfig>,
    #[serde(alias = "editLink", skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,
    #[serde(alias = "ignoreDeadLinks", skip_serializing_if = "Option::is_none")]
    pub ignore_dead_links: Option<bool>,
}

impl ThemeOverride {
    /// Load and validate a revision file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content, SourceFormat::from_path(path))
    }

    /// Parse a revision and validate the keys it sets.
    pub fn from_str(content: &str, format: SourceFormat) -> Result<Self, ConfigError> {
        let (revision, ignored): (Self, _) = parse_with_ignored(content, format)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(FieldPath::new(field), "unknown field, ignored");
        }
        revision.check(&mut diag);

        diag.into_error()?.print_warnings();
        Ok(revision)
    }

    fn check(&self, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::root();

        if let Some(site) = &self.site {
            let path = root.field("site");
            if let Some(description) = &site.description
                && description.trim().is_empty()
            {
                diag.error(path.field("description"), "site description cannot be empty");
            }
            if let Some(icon) = &site.icon {
                check_link(icon, path.field("icon"), diag);
            }
            if let Some(template) = &site.title_template {
                check_title_template(template, path.field("title_template"), diag);
            }
        }
        if let Some(logo) = &self.logo {
            check_link(logo, root.field("logo"), diag);
        }
        if let Some(nav) = &self.nav {
            validate_nav(nav, &root.field("nav"), diag);
        }
        if let Some(sidebar) = &self.sidebar {
            sidebar.validate(&root.field("sidebar"), diag);
        }
        if let Some(links) = &self.social_links {
            validate_social_links(links, &root.field("social_links"), diag);
        }
        if let Some(footer) = &self.footer {
            footer.validate(&root.field("footer"), diag);
        }
        if let Some(search) = &self.search {
            search.validate(&root.field("search"), diag);
        }
        if let Some(head) = &self.head {
            validate_head(head, &root.field("head"), diag);
        }
        if let Some(markdown) = &self.markdown {
            markdown.validate(&root.field("markdown"), diag);
        }
        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(&root.field("edit_link"), diag);
        }
    }

    /// Apply this revision to `config` in place.
    fn apply_to(&self, config: &mut ThemeConfig) {
        if let Some(site) = &self.site {
            replace(&mut config.site.title, &site.title);
            replace(&mut config.site.description, &site.description);
            replace(&mut config.site.lang, &site.lang);
            if site.icon.is_some() {
                config.site.icon.clone_from(&site.icon);
            }
            if site.title_template.is_some() {
                config.site.title_template.clone_from(&site.title_template);
            }
        }

        if self.logo.is_some() {
            config.logo.clone_from(&self.logo);
        }
        replace(&mut config.nav, &self.nav);
        if let Some(sidebar) = &self.sidebar {
            for (prefix, sections) in sidebar.iter() {
                config.sidebar.insert(prefix, sections.to_vec());
            }
        }
        replace(&mut config.social_links, &self.social_links);
        if self.footer.is_some() {
            config.footer.clone_from(&self.footer);
        }
        if self.search.is_some() {
            config.search.clone_from(&self.search);
        }
        replace(&mut config.head, &self.head);
        replace(&mut config.markdown, &self.markdown);
        if self.edit_link.is_some() {
            config.edit_link.clone_from(&self.edit_link);
        }
        replace(&mut config.ignore_dead_links, &self.ignore_dead_links);
    }
}

/// Overwrite `target` when the revision carries a value.
fn replace<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl ThemeConfig {
    /// New config with `revision` layered on top of `self`.
    ///
    /// The result is not re-validated; see [`fold`] for the checked path.
    pub fn merge(&self, revision: &ThemeOverride) -> ThemeConfig {
        let mut merged = self.clone();
        revision.apply_to(&mut merged);
        merged
    }
}

/// Apply revisions in order (later ones win) and validate the result.
pub fn fold<'a>(
    base: &ThemeConfig,
    revisions: impl IntoIterator<Item = &'a ThemeOverride>,
) -> Result<ThemeConfig, ConfigError> {
    let merged = revisions
        .into_iter()
        .fold(base.clone(), |config, revision| config.merge(revision));
    merged.validate()?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavLink, SidebarSection, test_parse_config};

    fn base() -> ThemeConfig {
        test_parse_config(
            r#"
[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "Reference"
link = "/reference/"

[[social_links]]
icon = "github"
link = "https://github.com/robonet-tech"

[footer]
message = "old"
copyright = "Copyright © 2025"

[[sidebar."/reference/"]]
text = "Reference"
items = [{ text = "Tools", link = "/reference/tools" }]
"#,
        )
    }

    fn revision(source: &str) -> ThemeOverride {
        ThemeOverride::from_str(source, SourceFormat::Toml).unwrap()
    }

    #[test]
    fn test_sidebar_prefix_replaced_not_appended() {
        let base = base();
        let rev = revision(
            r#"
[[sidebar."/guide/"]]
text = "Getting Started"
items = [{ text = "Quick Start", link = "/guide/quick-start" }]

[[sidebar."/guide/"]]
text = "Platform"
items = [{ text = "Wallet", link = "/guide/wallet" }]
"#,
        );

        let merged = base.merge(&rev);
        let guide = merged.sidebar.get("/guide/").unwrap();
        assert_eq!(guide.len(), 2);
        assert_eq!(guide[0].text, "Getting Started");
        assert_eq!(guide[1].text, "Platform");
        assert!(!guide.iter().any(|s| s.text == "Guide"));

        // Untouched prefix survives
        assert_eq!(merged.sidebar.get("/reference/"), base.sidebar.get("/reference/"));
        // Base is not modified
        assert_eq!(base.sidebar.get("/guide/").unwrap()[0].text, "Guide");
    }

    #[test]
    fn test_new_prefix_added() {
        let rev = ThemeOverride {
            sidebar: Some(
                [(
                    "/api/".to_string(),
                    vec![SidebarSection::new("API", vec![NavLink::new("Auth", "/api/auth")])],
                )]
                .into_iter()
                .collect(),
            ),
            ..ThemeOverride::default()
        };
        let merged = base().merge(&rev);
        assert_eq!(merged.sidebar.len(), 3);
        assert_eq!(merged.resolve_sidebar("/api/auth")[0].text, "API");
    }

    #[test]
    fn test_lists_replaced_wholesale() {
        let rev = revision("social_links = []\n\n[[nav]]\ntext = \"Docs\"\nlink = \"/guide/\"\n");
        let merged = base().merge(&rev);

        assert_eq!(merged.nav.len(), 1);
        assert_eq!(merged.nav[0].text(), "Docs");
        assert!(merged.social_links.is_empty());
    }

    #[test]
    fn test_absent_fields_keep_base() {
        let base = base();
        let merged = base.merge(&ThemeOverride::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_site_fields_individually() {
        let rev = revision("[site]\ntitle = \" \"\ntitle_template = \"%s – Robonet\"\n");
        let merged = base().merge(&rev);

        assert_eq!(merged.site.title, " ");
        assert_eq!(merged.site.description, "Test");
        assert_eq!(merged.page_title(Some("Billing")), "Billing – Robonet");
    }

    #[test]
    fn test_footer_replaced_as_a_whole() {
        let rev = revision("[footer]\ncopyright = \"Copyright © 2026 Robonet Finance\"\n");
        let merged = base().merge(&rev);
        let footer = merged.footer.unwrap();

        assert_eq!(footer.copyright, "Copyright © 2026 Robonet Finance");
        assert_eq!(footer.message, "");
    }

    #[test]
    fn test_fold_later_revision_wins() {
        let first = revision("logo = \"/logo-dark.svg\"\nignore_dead_links = true\n");
        let second = revision("logo = \"https://robonet.finance/images/logo/logo.svg\"\n");

        let merged = fold(&base(), [&first, &second]).unwrap();
        assert_eq!(
            merged.logo.as_deref(),
            Some("https://robonet.finance/images/logo/logo.svg")
        );
        assert!(merged.ignore_dead_links);
    }

    #[test]
    fn test_fold_validates_result() {
        let rev = ThemeOverride {
            site: Some(SiteOverride {
                description: Some(String::new()),
                ..SiteOverride::default()
            }),
            ..ThemeOverride::default()
        };
        let err = fold(&base(), [&rev]).unwrap_err();
        assert!(err.diagnostics().unwrap().has_error_at("site.description"));
    }

    #[test]
    fn test_revision_validation() {
        let err = ThemeOverride::from_str(
            "[[sidebar.\"/guide/\"]]\ntext = \"G\"\nitems = [{ text = \"x\", link = \"\" }]\n",
            SourceFormat::Toml,
        )
        .unwrap_err();
        assert!(
            err.diagnostics()
                .unwrap()
                .has_error_at("sidebar.\"/guide/\"[0].items[0].link")
        );
    }

    #[test]
    fn test_revision_needs_no_required_fields() {
        let rev = revision("ignore_dead_links = false\n");
        assert_eq!(rev.ignore_dead_links, Some(false));
        assert!(rev.site.is_none());
        assert!(rev.sidebar.is_none());
    }

    #[test]
    fn test_revision_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rev.json");
        fs::write(&path, r#"{ "ignoreDeadLinks": true, "search": { "provider": "local" } }"#)
            .unwrap();

        let rev = ThemeOverride::load(&path).unwrap();
        assert_eq!(rev.ignore_dead_links, Some(true));
        assert_eq!(rev.search, Some(SearchConfig::Local));
    }

    #[test]
    fn test_fold_demo_revision() {
        let base = ThemeConfig::from_str(
            include_str!("../../demos/sitenav.toml"),
            SourceFormat::Toml,
        )
        .unwrap();
        let rev = ThemeOverride::from_str(
            include_str!("../../demos/revisions/social-card.toml"),
            SourceFormat::Toml,
        )
        .unwrap();

        let merged = fold(&base, [&rev]).unwrap();
        assert_eq!(merged.head.len(), 5);
        assert_eq!(merged.nav.len(), 2);
        assert_eq!(merged.social_links.len(), 2);
        assert_eq!(merged.site.description, base.site.description);
        assert_eq!(merged.sidebar, base.sidebar);
        assert_eq!(merged.page_title(Some("Quick Start")), "Quick Start – Robonet");
    }
}
