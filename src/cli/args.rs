//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Navigation and theme config tool for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "sitenav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check,

    /// Print the sidebar and prev/next links for a page path
    #[command(visible_alias = "r")]
    Resolve {
        /// Request path, e.g. /guide/quick-start
        path: String,
    },

    /// Layer revision files onto the config and print the result
    #[command(visible_alias = "m")]
    Merge {
        /// Revision files, applied in order (later ones win)
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        revisions: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the normalized config
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output arguments shared by Merge and Show.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print JSON instead of TOML
    #[arg(short, long)]
    pub json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merge() {
        let cli = Cli::parse_from([
            "sitenav",
            "-C",
            "docs/sitenav.toml",
            "merge",
            "a.toml",
            "b.json",
            "--json",
        ]);
        assert_eq!(cli.config, PathBuf::from("docs/sitenav.toml"));
        let Commands::Merge { revisions, output } = cli.command else {
            panic!("expected merge");
        };
        assert_eq!(revisions.len(), 2);
        assert!(output.json);
        assert!(output.output.is_none());
    }

    #[test]
    fn test_merge_requires_revision() {
        assert!(Cli::try_parse_from(["sitenav", "merge"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitenav", "resolve", "/guide/", "-v", "--color", "never"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "/guide/"));
    }

    #[test]
    fn test_version_flag_kept() {
        let err = Cli::try_parse_from(["sitenav", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
