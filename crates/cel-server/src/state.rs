use std::sync::Arc;

use cel_config::CelConfig;
use cel_content::{Composer, ContentCatalog, SiteLinks};

use crate::clock::{Clock, SystemClock};
use crate::error::ServerError;

/// Shared, read-only application state.
#[derive(Debug)]
pub struct AppState {
    pub composer: Composer,
    pub links: SiteLinks,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(composer: Composer, links: SiteLinks, clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            composer,
            links,
            clock,
        })
    }

    /// Load the configured catalog and read time from the system clock.
    ///
    /// A broken catalog file fails here, before the listener is bound.
    pub fn from_config(config: &CelConfig) -> Result<Arc<Self>, ServerError> {
        let catalog = load_catalog(config)?;
        tracing::info!(source = %catalog.source(), "content catalog ready");
        Ok(Self::new(
            Composer::new(catalog),
            SiteLinks::new(config.site.base_url(), config.site.brand.clone()),
            Arc::new(SystemClock),
        ))
    }
}

/// The catalog named by `content.catalog_path`, or the built-in one.
pub fn load_catalog(config: &CelConfig) -> Result<ContentCatalog, ServerError> {
    match config.content.catalog_override() {
        Some(path) => Ok(ContentCatalog::from_path(&path)?),
        None => Ok(ContentCatalog::builtin()?),
    }
}
