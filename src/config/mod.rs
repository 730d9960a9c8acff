//! Theme configuration management for `sitenav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── nav        # nav bar links and groups
//! │   ├── sidebar    # prefix-keyed sidebar
//! │   └── ...        # social, footer, search, head, markdown, edit
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Reloadable config handle
//! ├── merge.rs       # Revision overrides
//! ├── source.rs      # TOML / JSON parsing
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Key              | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[site]`         | Site metadata (title, description, icon)       |
//! | `logo`           | Logo image shown in the nav bar                |
//! | `nav`            | Top navigation bar                             |
//! | `sidebar`        | Path prefix → sidebar sections                 |
//! | `social_links`   | Social icon links                              |
//! | `[footer]`       | Footer message and copyright                   |
//! | `[search]`       | Search provider                                |
//! | `head`           | Extra `<head>` tags                            |
//! | `[markdown]`     | Code highlight themes                          |
//! | `[edit_link]`    | "Edit this page" link                          |
//! | `ignore_dead_links` | Renderer dead-link check switch             |

pub mod merge;
pub mod section;
mod source;
pub mod types;
pub mod util;

pub use merge::{SiteOverride, ThemeOverride, fold};
pub use section::{
    AdjacentPages, CodeTheme, EditLinkConfig, FooterConfig, HeadTag, MarkdownConfig, NavGroup,
    NavItem, NavLink, SearchConfig, SidebarMap, SidebarSection, SiteMeta, SocialIcon, SocialLink,
};
pub use source::SourceFormat;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigHandle, FieldPath};

use section::{validate_head, validate_nav, validate_social_links};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::check_link;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration describing the site chrome.
///
/// Built once per site build and never mutated afterwards; a changed
/// source produces a new value (see [`ConfigHandle`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Site metadata
    pub site: SiteMeta,

    /// Logo image, URL or path starting with `/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Top navigation bar
    pub nav: Vec<NavItem>,

    /// Sidebar per path prefix
    pub sidebar: SidebarMap,

    #[serde(alias = "socialLinks")]
    pub social_links: Vec<SocialLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,

    /// Extra `<head>` tags
    pub head: Vec<HeadTag>,

    pub markdown: MarkdownConfig,

    #[serde(alias = "editLink", skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,

    /// Let the renderer build even when pages link to missing targets.
    #[serde(alias = "ignoreDeadLinks")]
    pub ignore_dead_links: bool,
}

impl ThemeConfig {
    /// Load and validate configuration from a file.
    ///
    /// The format follows the extension (`.json` or TOML otherwise).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        crate::debug!("config"; "loading {}", path.display());
        Self::from_str(&content, SourceFormat::from_path(path))
    }

    /// Parse and validate configuration, printing any warnings.
    pub fn from_str(content: &str, format: SourceFormat) -> Result<Self, ConfigError> {
        let (config, warnings) = Self::parse(content, format)?;
        warnings.print_warnings();
        Ok(config)
    }

    /// Parse and validate configuration, returning warnings (unknown fields,
    /// empty groups) instead of printing them.
    pub fn parse(
        content: &str,
        format: SourceFormat,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, ignored): (Self, _) = source::parse_with_ignored(content, format)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(FieldPath::new(field), "unknown field, ignored");
        }
        config.check(&mut diag);

        Ok((config, diag.into_error()?))
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.check(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn check(&self, diag: &mut ConfigDiagnostics) {
        let root = FieldPath::root();

        self.site.validate(&root.field("site"), diag);

        if let Some(logo) = &self.logo {
            check_link(logo, root.field("logo"), diag);
        }

        validate_nav(&self.nav, &root.field("nav"), diag);

        let sidebar = root.field("sidebar");
        self.sidebar.validate(&sidebar, diag);
        if self.sidebar.section_count() == 0 {
            diag.error_with_hint(
                sidebar,
                "at least one sidebar section is required",
                "add e.g.: [[sidebar.\"/guide/\"]] with text and items",
            );
        }

        validate_social_links(&self.social_links, &root.field("social_links"), diag);

        if let Some(footer) = &self.footer {
            footer.validate(&root.field("footer"), diag);
        }
        if let Some(search) = &self.search {
            search.validate(&root.field("search"), diag);
        }

        validate_head(&self.head, &root.field("head"), diag);
        self.markdown.validate(&root.field("markdown"), diag);

        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(&root.field("edit_link"), diag);
        }
    }

    // ========================================================================
    // queries
    // ========================================================================

    /// Sidebar sections for a request path (longest matching prefix).
    ///
    /// An unmatched path yields an empty slice, which is not an error.
    pub fn resolve_sidebar(&self, path: &str) -> &[SidebarSection] {
        self.sidebar.resolve(path)
    }

    /// Previous and next pages around `path` in its sidebar.
    pub fn adjacent_pages(&self, path: &str) -> AdjacentPages<'_> {
        self.sidebar.adjacent(path)
    }

    /// Full `<title>` for a page, applying `site.title_template`.
    pub fn page_title(&self, title: Option<&str>) -> String {
        self.site.page_title(title)
    }

    /// "Edit this page" URL for a page source path, if configured.
    pub fn edit_url(&self, page: &str) -> Option<String> {
        self.edit_link.as_ref().map(|edit| edit.url_for(page))
    }

    /// Every link of nav bar and sidebar, in display order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav.iter().flat_map(NavItem::links).chain(
            self.sidebar
                .iter()
                .flat_map(|(_, sections)| sections.iter().flat_map(|s| s.items.iter())),
        )
    }

    // ========================================================================
    // serialization
    // ========================================================================

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize in the given source format.
    pub fn to_format(&self, format: SourceFormat) -> Result<String, ConfigError> {
        match format {
            SourceFormat::Toml => self.to_toml(),
            SourceFormat::Json => self.to_json(),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid source; `extra` is prepended so it may hold top-level keys.
#[cfg(test)]
pub fn test_config_source(extra: &str) -> String {
    format!(
        "{extra}\n[site]\ntitle = \"Test\"\ndescription = \"Test\"\n\n[[sidebar.\"/guide/\"]]\ntext = \"Guide\"\nitems = [{{ text = \"Intro\", link = \"/guide/\" }}]\n"
    )
}

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ThemeConfig {
    let (parsed, warnings) =
        ThemeConfig::parse(&test_config_source(extra), SourceFormat::Toml).unwrap();
    assert!(
        warnings.warnings().iter().all(|(_, m)| !m.contains("unknown")),
        "test config has unknown fields: {:?}",
        warnings.warnings()
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
