use std::path::PathBuf;

use clap::Subcommand;

/// Content catalog maintenance.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Validate a catalog file (or the configured catalog) and list table sizes.
    Check {
        /// Catalog TOML file; defaults to `content.catalog_path` or the built-in catalog.
        path: Option<PathBuf>,
    },
    /// Write the active catalog as TOML, to use as a starting point for edits.
    Export {
        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
