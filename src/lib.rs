//! sitenav - navigation and theme configuration for documentation sites.
//!
//! Loads a declarative theme config (`sitenav.toml` or JSON), validates it
//! and answers the questions a renderer asks of it: which sidebar belongs
//! to a page, which pages come before and after it, what its title is.
//!
//! ```
//! use sitenav::config::{SourceFormat, ThemeConfig};
//!
//! let config = ThemeConfig::from_str(
//!     r#"
//! [site]
//! description = "Build and deploy agentic trading bots"
//!
//! [[sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [{ text = "Quick Start", link = "/guide/quick-start" }]
//! "#,
//!     SourceFormat::Toml,
//! )?;
//!
//! assert_eq!(config.resolve_sidebar("/guide/quick-start")[0].text, "Getting Started");
//! assert!(config.resolve_sidebar("/unknown/page").is_empty());
//! # Ok::<(), sitenav::config::ConfigError>(())
//! ```

pub mod config;
pub mod logger;
pub mod utils;
