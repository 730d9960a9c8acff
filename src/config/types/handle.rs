//! Reloadable theme config handle.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! A config is never patched in place: every change to the source file
//! produces a freshly loaded `ThemeConfig` that replaces the old one.

use crate::config::{ConfigError, SourceFormat, ThemeConfig};
use crate::utils::hash;
use arc_swap::ArcSwap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Current config of one source file plus the hash it was built from.
pub struct ConfigHandle {
    path: PathBuf,
    format: SourceFormat,
    current: ArcSwap<ThemeConfig>,
    hash: AtomicU64,
}

impl ConfigHandle {
    /// Load `path` and wrap the result.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let format = SourceFormat::from_path(&path);
        let content = read(&path)?;
        let config = ThemeConfig::from_str(&content, format)?;

        Ok(Self {
            path,
            format,
            current: ArcSwap::from_pointee(config),
            hash: AtomicU64::new(hash::compute(content.as_bytes())),
        })
    }

    /// Snapshot of the current config.
    #[inline]
    pub fn get(&self) -> Arc<ThemeConfig> {
        self.current.load_full()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload config from disk if content changed.
    ///
    /// Returns `Ok(true)` if config was replaced, `Ok(false)` if unchanged.
    /// On error the previous config stays current.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let content = read(&self.path)?;
        let new_hash = hash::compute(content.as_bytes());

        if new_hash == self.hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let config = ThemeConfig::from_str(&content, self.format)?;
        self.current.store(Arc::new(config));
        self.hash.store(new_hash, Ordering::Relaxed);

        crate::debug!("reload"; "rebuilt theme config from {}", self.path.display());
        Ok(true)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
}
