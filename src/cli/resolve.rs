//! `sitenav resolve`: show which sidebar a page gets.

use anyhow::Result;
use owo_colors::OwoColorize;
use sitenav::config::ThemeConfig;
use sitenav::config::section::NavLink;
use sitenav::log;

use super::Cli;
use super::common::load_config;

pub fn resolve_page(cli: &Cli, path: &str) -> Result<()> {
    let (_, config) = load_config(cli)?;

    let Some(prefix) = config.sidebar.matching_prefix(path) else {
        log!("resolve"; "no sidebar for {}", path);
        return Ok(());
    };
    log!("resolve"; "{} -> {}", path, prefix.bright_blue());

    for line in render(&config, path) {
        println!("{line}");
    }
    Ok(())
}

/// Sidebar outline for `path`, marking the current page.
fn render(config: &ThemeConfig, path: &str) -> Vec<String> {
    let current = config.adjacent_pages(path);
    let mut lines = Vec::new();

    for section in config.resolve_sidebar(path) {
        let state = match section.collapsed {
            Some(true) => " (collapsed)",
            _ => "",
        };
        lines.push(format!("{}{}", section.text, state));
        for item in &section.items {
            lines.push(format!("  {} {}", item.text, item.link));
        }
    }

    lines.extend(neighbor("prev", current.prev));
    lines.extend(neighbor("next", current.next));
    lines
}

fn neighbor(label: &str, link: Option<&NavLink>) -> Option<String> {
    link.map(|link| format!("{label}: {} {}", link.text, link.link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitenav::config::SourceFormat;

    fn demo() -> ThemeConfig {
        ThemeConfig::from_str(include_str!("../../demos/sitenav.toml"), SourceFormat::Toml).unwrap()
    }

    #[test]
    fn test_render_outline() {
        let lines = render(&demo(), "/guide/quick-start");

        assert_eq!(lines[0], "Getting Started");
        assert_eq!(lines[1], "  What is Robonet? /guide/");
        assert!(lines.contains(&"prev: What is Robonet? /guide/".to_string()));
        assert!(lines.contains(&"next: Chat Interface /guide/chat-interface".to_string()));
    }

    #[test]
    fn test_render_unmatched_is_empty() {
        assert!(render(&demo(), "/blog/").is_empty());
    }
}
