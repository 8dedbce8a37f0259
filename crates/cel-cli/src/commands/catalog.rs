use std::path::Path;

use anyhow::Context;
use cel_config::CelConfig;
use cel_content::ContentCatalog;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::output::output;

/// Handle `cel catalog`.
pub fn handle(
    action: &CatalogCommands,
    config: &CelConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Check { path } => {
            let catalog = match path {
                Some(path) => load(path)?,
                None => bootstrap::composer(config)?.catalog().clone(),
            };
            output(&catalog.report(), flags.format)
        }
        CatalogCommands::Export { output: target } => {
            let catalog = bootstrap::composer(config)?.catalog().clone();
            let text = catalog.to_toml_string()?;
            match target {
                Some(target) => {
                    std::fs::write(target, text)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    tracing::info!(path = %target.display(), "catalog exported");
                }
                None => print!("{text}"),
            }
            Ok(())
        }
    }
}

fn load(path: &Path) -> anyhow::Result<ContentCatalog> {
    ContentCatalog::from_path(path)
        .with_context(|| format!("catalog {} is invalid", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_catalog_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let text = ContentCatalog::builtin().unwrap().to_toml_string().unwrap();
        std::fs::write(&path, text).unwrap();

        let catalog = load(&path).unwrap();
        assert_eq!(catalog.report().tables.len(), 10);
    }

    #[test]
    fn invalid_catalog_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "colors = []").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }
}
