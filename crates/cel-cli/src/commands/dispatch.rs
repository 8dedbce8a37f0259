use cel_config::CelConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: CelConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Horoscope(args) => commands::horoscope::handle(&args, &config, flags),
        Commands::Signs(args) => commands::signs::handle(&args, flags),
        Commands::Moon(args) => commands::moon::handle(&args, flags),
        Commands::Rituals(args) => commands::rituals::handle(&args, &config, flags),
        Commands::Digest(args) => commands::digest::handle(&args, &config, flags),
        Commands::Catalog { action } => commands::catalog::handle(&action, &config, flags),
    }
}
