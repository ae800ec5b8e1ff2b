use std::path::PathBuf;

use clap::Parser;

/// Command-line options for the portfolio TUI.
#[derive(Parser, Clone, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// Load the catalog from a TOML file instead of the built-in one.
    #[arg(long = "catalog", short = 'c', value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging to the folio data directory.
    #[clap(long = "debug", short = 'd', default_value_t = false)]
    pub debug: bool,
}
