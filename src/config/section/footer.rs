//! `[footer]` configuration.
//!
//! ```toml
//! [footer]
//! message = '<a href="https://discord.gg/robonet">Discord</a> · <a href="mailto:support@robonet.finance">Contact Us</a>'
//! copyright = "Copyright © 2026 Robonet Finance"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// HTML fragment rendered above the copyright line.
    pub message: String,
    pub copyright: String,
}

impl FooterConfig {
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty() && self.copyright.trim().is_empty()
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.is_empty() {
            diag.warn(path.clone(), "footer has neither message nor copyright");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_footer_absent_by_default() {
        assert!(test_parse_config("").footer.is_none());
    }

    #[test]
    fn test_footer_html_message() {
        let config = test_parse_config(
            r#"
[footer]
message = '<a href="https://discord.gg/robonet">Discord</a> · <a href="https://x.com/robonethq">X.com</a>'
copyright = "Copyright © 2026 Robonet Finance"
"#,
        );
        let footer = config.footer.unwrap();
        assert!(footer.message.contains("<a href=\"https://discord.gg/robonet\">"));
        assert_eq!(footer.copyright, "Copyright © 2026 Robonet Finance");
    }

    #[test]
    fn test_empty_footer_warns() {
        let mut diag = ConfigDiagnostics::new();
        FooterConfig::default().validate(&FieldPath::new("footer"), &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
