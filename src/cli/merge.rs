//! `sitenav merge`: layer revision files onto the config.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sitenav::config::{ThemeOverride, fold};
use sitenav::utils::plural_count;
use sitenav::{debug, debug_do, log};

use super::common::{load_config, write_config};
use super::{Cli, OutputArgs};

pub fn merge_revisions(cli: &Cli, revisions: &[PathBuf], output: &OutputArgs) -> Result<()> {
    let (path, base) = load_config(cli)?;

    let overrides = revisions
        .iter()
        .map(|revision| {
            debug!("merge"; "loading revision {}", revision.display());
            ThemeOverride::load(revision)
                .with_context(|| format!("failed to load revision {}", revision.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    debug_do! {
        for (file, revision) in revisions.iter().zip(&overrides) {
            if let Ok(serde_json::Value::Object(keys)) = serde_json::to_value(revision) {
                let keys: Vec<&str> = keys.keys().map(String::as_str).collect();
                log!("merge"; "{} sets {}", file.display(), keys.join(", "));
            }
        }
    }

    let merged = fold(&base, &overrides).context("merged config is invalid")?;
    log!(
        "merge";
        "applied {} onto {}",
        plural_count(overrides.len(), "revision"),
        path.display()
    );

    write_config("merge", &merged, output, &mut io::stdout().lock())
}
