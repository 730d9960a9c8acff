//! sitenav - check, resolve and merge documentation site theme configs.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitenav::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::check_config(&cli),
        Commands::Resolve { path } => cli::resolve::resolve_page(&cli, path),
        Commands::Merge { revisions, output } => {
            cli::merge::merge_revisions(&cli, revisions, output)
        }
        Commands::Show { output } => cli::show::show_config(&cli, output),
    }
}
