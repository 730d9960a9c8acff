//! `sitenav show`: print the normalized config.

use std::io;

use anyhow::Result;

use super::common::{load_config, write_config};
use super::{Cli, OutputArgs};

pub fn show_config(cli: &Cli, output: &OutputArgs) -> Result<()> {
    let (_, config) = load_config(cli)?;
    write_config("show", &config, output, &mut io::stdout().lock())
}
