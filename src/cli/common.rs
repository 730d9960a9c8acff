//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use sitenav::config::util::find_config_file;
use sitenav::config::{SourceFormat, ThemeConfig};
use sitenav::{debug, log};

use super::{Cli, OutputArgs};

/// Find the config file named by `-C`, searching upward from the cwd.
pub fn locate_config(cli: &Cli) -> Result<PathBuf> {
    find_config_file(&cli.config).ok_or_else(|| {
        anyhow!(
            "config file `{}` not found in current or parent directories",
            cli.config.display()
        )
    })
}

/// Locate, load and validate the config.
pub fn load_config(cli: &Cli) -> Result<(PathBuf, ThemeConfig)> {
    let path = locate_config(cli)?;
    debug!("config"; "using {}", path.display());
    let config = ThemeConfig::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok((path, config))
}

/// Render `config` as TOML or JSON into `out`, or into `--output` when given.
///
/// `out` receives the rendered config only; status lines go to the logger.
pub fn write_config(
    module: &str,
    config: &ThemeConfig,
    args: &OutputArgs,
    out: &mut impl Write,
) -> Result<()> {
    let format = if args.json {
        SourceFormat::Json
    } else {
        SourceFormat::Toml
    };
    let rendered = config.to_format(format)?;

    if let Some(path) = &args.output {
        write_file(path, &rendered)?;
        log!(module; "wrote output to {}", path.display());
    } else {
        writeln!(out, "{}", rendered.trim_end())?;
        out.flush()?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
