//! Source formats and unknown-field aware parsing.

use super::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Syntax of a configuration source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFormat {
    #[default]
    Toml,
    Json,
}

impl SourceFormat {
    /// Pick the format from a file extension (`.json` → JSON, anything else → TOML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse content, collecting any unknown fields.
pub fn parse_with_ignored<T: DeserializeOwned>(
    content: &str,
    format: SourceFormat,
) -> Result<(T, Vec<String>), ConfigError> {
    let mut ignored = Vec::new();
    let value = match format {
        SourceFormat::Toml => {
            let deserializer = toml::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, |path| ignored.push(path.to_string()))?
        }
        SourceFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let value = serde_ignored::deserialize(&mut deserializer, |path| {
                ignored.push(path.to_string())
            })?;
            deserializer.end()?;
            value
        }
    };
    Ok((value, ignored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("sitenav.toml")),
            SourceFormat::Toml
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("docs/theme.JSON")),
            SourceFormat::Json
        );
        assert_eq!(SourceFormat::from_path(Path::new("theme")), SourceFormat::Toml);
    }

    #[test]
    fn test_ignored_fields_toml() {
        let (probe, ignored): (Probe, _) =
            parse_with_ignored("name = \"a\"\nextra = 1", SourceFormat::Toml).unwrap();
        assert_eq!(probe.name, "a");
        assert_eq!(ignored, vec!["extra".to_string()]);
    }

    #[test]
    fn test_ignored_fields_json() {
        let (probe, ignored): (Probe, _) =
            parse_with_ignored(r#"{"name": "a", "extra": true}"#, SourceFormat::Json).unwrap();
        assert_eq!(probe.name, "a");
        assert_eq!(ignored, vec!["extra".to_string()]);
    }

    #[test]
    fn test_trailing_json_rejected() {
        let result: Result<(Probe, _), _> =
            parse_with_ignored(r#"{"name": "a"} {}"#, SourceFormat::Json);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
