//! `social_links` configuration.
//!
//! ```toml
//! [[social_links]]
//! icon = "github"
//! link = "https://github.com/robonet-tech"
//! ```

use crate::config::util::check_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon set understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Discord,
    X,
    Twitter,
    Linkedin,
    Youtube,
    Mastodon,
    Slack,
    Npm,
    Instagram,
    Facebook,
}

impl SocialIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Discord => "discord",
            Self::X => "x",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Mastodon => "mastodon",
            Self::Slack => "slack",
            Self::Npm => "npm",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    /// Absolute URL.
    pub link: String,
}

impl SocialLink {
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        check_absolute_url(&self.link, path.field("link"), diag);
    }
}

pub fn validate_social_links(
    links: &[SocialLink],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (i, link) in links.iter().enumerate() {
        link.validate(&path.index(i), diag);
    }
}
