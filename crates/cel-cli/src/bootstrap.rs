use anyhow::Context;
use cel_config::CelConfig;
use cel_content::Composer;
use cel_core::CalendarDay;
use cel_server::{Clock, SystemClock};

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config (plus `--config` when given).
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CelConfig> {
    match &flags.config {
        Some(path) => {
            dotenvy::dotenv().ok();
            CelConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => CelConfig::load_with_dotenv().context("failed to load configuration"),
    }
}

/// A composer over the configured catalog.
pub fn composer(config: &CelConfig) -> anyhow::Result<Composer> {
    let catalog =
        cel_server::state::load_catalog(config).context("failed to load content catalog")?;
    tracing::debug!(source = %catalog.source(), "content catalog loaded");
    Ok(Composer::new(catalog))
}

/// `--date` if given, otherwise today's local date.
pub fn resolve_day(date: Option<&str>) -> anyhow::Result<CalendarDay> {
    date.map_or_else(
        || Ok(SystemClock.today()),
        |date| CalendarDay::parse(date).map_err(anyhow::Error::from),
    )
}
