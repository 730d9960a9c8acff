//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Where a link target points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-internal path, e.g. `/guide/quick-start`.
    Internal,
    /// Absolute URL (`http`, `https` or `mailto`).
    External,
}

/// Classify a link target, rejecting anything that is neither an absolute
/// URL nor a path starting with a single `/`.
///
/// # Examples
/// ```ignore
/// classify_link("/guide/")                     -> Ok(Internal)
/// classify_link("https://github.com/org")      -> Ok(External)
/// classify_link("mailto:support@example.com")  -> Ok(External)
/// classify_link("")                            -> Err(..)
/// classify_link("guide/intro")                 -> Err(..)
/// classify_link("//cdn.example.com/x")         -> Err(..)
/// ```
pub fn classify_link(target: &str) -> Result<LinkKind, String> {
    if target.trim().is_empty() {
        return Err("link target is empty".into());
    }
    if target.chars().any(char::is_whitespace) {
        return Err(format!("link target '{target}' contains whitespace"));
    }

    if let Some(rest) = target.strip_prefix('/') {
        if rest.starts_with('/') {
            return Err(format!("'{target}' is a protocol-relative URL"));
        }
        return Ok(LinkKind::Internal);
    }

    match url::Url::parse(target) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
                Ok(LinkKind::External)
            }
            "http" | "https" => Err(format!("'{target}' has no valid host")),
            "mailto" => Ok(LinkKind::External),
            scheme => Err(format!(
                "scheme '{scheme}' not supported, must be http, https or mailto"
            )),
        },
        Err(e) => Err(format!(
            "'{target}' is neither an absolute URL nor a path starting with '/' ({e})"
        )),
    }
}

/// Validate a link target, recording an error at `field` when malformed.
pub fn check_link(target: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(message) = classify_link(target) {
        diag.error_with_hint(
            field,
            message,
            "use an absolute URL like https://example.com or a path like /guide/",
        );
    }
}

/// Validate that a target is an absolute URL (internal paths rejected).
pub fn check_absolute_url(target: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match classify_link(target) {
        Ok(LinkKind::External) => {}
        Ok(LinkKind::Internal) => diag.error_with_hint(
            field,
            format!("'{target}' must be an absolute URL"),
            "use format like https://example.com",
        ),
        Err(message) => {
            diag.error_with_hint(field, message, "use format like https://example.com")
        }
    }
}

/// Strip query string and fragment from a request path.
///
/// ```ignore
/// page_path("/guide/intro?x=1#setup") -> "/guide/intro"
/// ```
pub fn page_path(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/sitenav.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
