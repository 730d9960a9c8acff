//! `sidebar` configuration: path-prefix keyed sidebar sections.
//!
//! # Example
//!
//! ```toml
//! [[sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [
//!     { text = "What is Robonet?", link = "/guide/" },
//!     { text = "Quick Start", link = "/guide/quick-start" },
//! ]
//!
//! [[sidebar."/reference/"]]
//! text = "Reference"
//! collapsed = true
//! items = [{ text = "MCP Tools", link = "/reference/mcp-tools" }]
//! ```
//!
//! A page gets the sections of the longest registered prefix that its URL
//! path starts with.

use super::nav::{NavLink, validate_links};
use crate::config::util::page_path;
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A titled list of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,
    pub items: Vec<NavLink>,
    /// Initial collapse state; `None` means the section is not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarSection {
    pub fn new(text: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            text: text.into(),
            items,
            collapsed: None,
        }
    }
}

/// Ordered mapping from URL path prefix to sidebar sections.
///
/// Kept as a list so registration order survives a round-trip and so
/// duplicate keys in a source reach validation instead of being merged
/// silently by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarMap {
    entries: Vec<(String, Vec<SidebarSection>)>,
}

/// Previous and next sidebar links around a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacentPages<'a> {
    pub prev: Option<&'a NavLink>,
    pub next: Option<&'a NavLink>,
}

impl SidebarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sections` under `prefix`, replacing any existing list for
    /// that prefix in place. Returns the replaced list.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        sections: Vec<SidebarSection>,
    ) -> Option<Vec<SidebarSection>> {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, existing)) => Some(std::mem::replace(existing, sections)),
            None => {
                self.entries.push((prefix, sections));
                None
            }
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, sections)| sections.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.entries
            .iter()
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(prefix, _)| prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of sections across all prefixes.
    pub fn section_count(&self) -> usize {
        self.entries.iter().map(|(_, sections)| sections.len()).sum()
    }

    /// Longest registered prefix of `path` (query and fragment ignored).
    pub fn matching_prefix(&self, path: &str) -> Option<&str> {
        let path = page_path(path);
        self.entries
            .iter()
            .map(|(prefix, _)| prefix.as_str())
            .filter(|prefix| path.starts_with(prefix))
            .max_by_key(|prefix| prefix.len())
    }

    /// Sections for `path`, or an empty slice when no prefix matches.
    pub fn resolve(&self, path: &str) -> &[SidebarSection] {
        self.matching_prefix(path)
            .and_then(|prefix| self.get(prefix))
            .unwrap_or_default()
    }

    /// Previous/next links around `path` in its resolved sidebar.
    ///
    /// Links are compared without query, fragment, `.html` suffix and
    /// trailing `/`, so `/guide/intro.html#top` and `/guide/intro/` both
    /// find the `/guide/intro` entry.
    pub fn adjacent(&self, path: &str) -> AdjacentPages<'_> {
        let links: Vec<&NavLink> = self
            .resolve(path)
            .iter()
            .flat_map(|section| section.items.iter())
            .collect();

        let target = normalize_page(path);
        match links.iter().position(|link| normalize_page(&link.link) == target) {
            Some(i) => AdjacentPages {
                prev: i.checked_sub(1).map(|j| links[j]),
                next: links.get(i + 1).copied(),
            },
            None => AdjacentPages::default(),
        }
    }

    /// Validate prefixes (non-empty, leading `/`, unique) and every link.
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for (prefix, sections) in &self.entries {
            let entry_path = path.key(prefix);

            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    entry_path.clone(),
                    format!("sidebar prefix '{prefix}' must start with '/'"),
                    "use a URL path prefix like \"/guide/\"",
                );
            }
            if !seen.insert(prefix.as_str()) {
                diag.error(
                    entry_path.clone(),
                    format!("duplicate sidebar prefix '{prefix}'"),
                );
            }
            if sections.is_empty() {
                diag.warn(entry_path.clone(), "prefix has no sidebar sections");
            }

            for (i, section) in sections.iter().enumerate() {
                validate_links(
                    &section.items,
                    &entry_path.index(i).field("items"),
                    diag,
                );
            }
        }
    }
}

/// Page identity used for prev/next lookup: no query or fragment, no
/// `.html` suffix and no trailing `/` (the root `/` stays as is).
fn normalize_page(path: &str) -> &str {
    let path = page_path(path);
    let path = path.strip_suffix(".html").unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => path,
        trimmed => trimmed,
    }
}

impl FromIterator<(String, Vec<SidebarSection>)> for SidebarMap {
    /// Collect entries, keeping duplicates for validation to report.
    fn from_iter<I: IntoIterator<Item = (String, Vec<SidebarSection>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, sections) in &self.entries {
            map.serialize_entry(prefix, sections)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = SidebarMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table mapping path prefixes to sidebar sections")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<SidebarSection>>()? {
                    entries.push(entry);
                }
                Ok(SidebarMap { entries })
            }
        }

        deserializer.deserialize_map(SidebarVisitor)
    }
}
