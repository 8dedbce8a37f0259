use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cel` binary.
#[derive(Debug, Parser)]
#[command(name = "cel", version, about = "Celestial - daily horoscopes, rituals and lunar phases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the discovered ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::subcommands::CatalogCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["cel", "--format", "raw", "--verbose", "moon"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Moon(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cel", "horoscope", "leo", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::Horoscope(args) => {
                assert_eq!(args.sign, "leo");
                assert!(!args.brief);
                assert!(args.date.date.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cel", "--format", "xml", "moon"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn horoscope_accepts_date_and_brief() {
        let cli = Cli::try_parse_from(["cel", "horoscope", "Taurus", "--date", "2025-01-01", "--brief"])
            .expect("cli should parse");
        match cli.command {
            Commands::Horoscope(args) => {
                assert_eq!(args.date.date.as_deref(), Some("2025-01-01"));
                assert!(args.brief);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn brief_and_details_conflict() {
        let parsed = Cli::try_parse_from(["cel", "horoscope", "Leo", "--brief", "--details"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["cel", "serve", "--port", "8080"]).expect("cli should parse");
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn catalog_check_takes_optional_path() {
        let cli = Cli::try_parse_from(["cel", "catalog", "check", "content.toml"])
            .expect("cli should parse");
        match cli.command {
            Commands::Catalog {
                action: CatalogCommands::Check { path },
            } => assert_eq!(path.as_deref(), Some(Path::new("content.toml"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["cel", "--config", "/tmp/cel.toml", "moon"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/cel.toml")));
    }
}
