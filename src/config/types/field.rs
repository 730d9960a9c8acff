//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Location of a value inside a theme configuration.
///
/// Paths are built while walking the config tree, so they carry list
/// indices and sidebar prefixes, e.g. `sidebar."/guide/"[0].items[1].link`.
///
/// # Example
///
/// ```
/// use sitenav::config::FieldPath;
///
/// let path = FieldPath::root().field("nav").index(2).field("link");
/// assert_eq!(path.as_str(), "nav[2].link");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Empty path (the config root).
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child field, joined with `.`.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// List element.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Map entry with an arbitrary (quoted) key.
    pub fn key(&self, key: &str) -> Self {
        self.field(&format!("{key:?}"))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
