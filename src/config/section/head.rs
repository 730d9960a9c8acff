//! `head` configuration: extra tags injected into every page's `<head>`.
//!
//! Accepts both a table form and the renderer's tuple form:
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "icon", type = "image/svg+xml", href = "/logo.svg" }
//!
//! # equivalent
//! head = [["link", { rel = "icon", type = "image/svg+xml", href = "/logo.svg" }]]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tags allowed inside `<head>`.
const HEAD_TAGS: &[&str] = &["meta", "link", "script", "style", "base", "noscript"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Inner content (inline scripts and styles).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadTagVisitor;

        impl<'de> Visitor<'de> for HeadTagVisitor {
            type Value = HeadTag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a head tag table or a [tag, attrs, content] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let tag = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let attrs = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let content = seq.next_element()?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }
                Ok(HeadTag {
                    tag,
                    attrs,
                    content,
                })
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut tag = None;
                let mut attrs = None;
                let mut content = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "tag" if tag.is_some() => return Err(de::Error::duplicate_field("tag")),
                        "tag" => tag = Some(map.next_value()?),
                        "attrs" if attrs.is_some() => {
                            return Err(de::Error::duplicate_field("attrs"));
                        }
                        "attrs" => attrs = Some(map.next_value()?),
                        "content" if content.is_some() => {
                            return Err(de::Error::duplicate_field("content"));
                        }
                        "content" => content = Some(map.next_value()?),
                        // Unknown keys are skipped so they surface as warnings
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(HeadTag {
                    tag: tag.ok_or_else(|| de::Error::missing_field("tag"))?,
                    attrs: attrs.unwrap_or_default(),
                    content,
                })
            }
        }

        deserializer.deserialize_any(HeadTagVisitor)
    }
}

impl HeadTag {
    pub fn new<'a>(tag: &str, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            content: None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if !HEAD_TAGS.contains(&self.tag.as_str()) {
            diag.error_with_hint(
                path.field("tag"),
                format!("unsupported head tag '{}'", self.tag),
                format!("use one of: {}", HEAD_TAGS.join(", ")),
            );
            return;
        }

        match self.tag.as_str() {
            "link" if self.attr("href").is_none() => {
                diag.error(path.field("attrs"), "link tag requires an href attribute");
            }
            "script" if self.attr("src").is_none() && self.content.is_none() => {
                diag.error(path.clone(), "script tag needs a src attribute or content");
            }
            _ => {}
        }
    }
}

pub fn validate_head(tags: &[HeadTag], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, tag) in tags.iter().enumerate() {
        tag.validate(&path.index(i), diag);
    }
}
