use anyhow::Context;
use cel_config::CelConfig;
use cel_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `cel serve`.
pub async fn handle(args: &ServeArgs, mut config: CelConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate().context("invalid server overrides")?;

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(%error, "refusing to start with a broken content catalog");
            return Err(error).context("failed to initialize server state");
        }
    };

    cel_server::serve(state, &config.server).await?;
    Ok(())
}
