//! `sitenav check`: load and validate the config.

use anyhow::Result;
use sitenav::config::ThemeConfig;
use sitenav::log;
use sitenav::utils::plural_count;

use super::Cli;
use super::common::load_config;

pub fn check_config(cli: &Cli) -> Result<()> {
    let (path, config) = load_config(cli)?;
    log!("check"; "{} is valid ({})", path.display(), summary(&config));
    Ok(())
}

fn summary(config: &ThemeConfig) -> String {
    format!(
        "{}, {}, {}",
        plural_count(config.sidebar.len(), "sidebar"),
        plural_count(config.sidebar.section_count(), "section"),
        plural_count(config.links().count(), "link"),
    )
}
