use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cel error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = bootstrap::load_config(&flags)?;

    commands::dispatch::dispatch(cli.command, config, &flags).await
}

/// Log level implied by `--quiet` / `--verbose`; quiet wins.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "info"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CELESTIAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(args: &[&str]) -> &'static str {
        let cli = cli::Cli::try_parse_from(args).expect("cli should parse");
        log_level(&cli.global_flags())
    }

    #[test]
    fn log_level_follows_global_flags() {
        assert_eq!(level_for(&["cel", "moon"]), "info");
        assert_eq!(level_for(&["cel", "--verbose", "moon"]), "debug");
        assert_eq!(level_for(&["cel", "moon", "--quiet"]), "error");
        assert_eq!(level_for(&["cel", "-q", "-v", "moon"]), "error");
    }
}
