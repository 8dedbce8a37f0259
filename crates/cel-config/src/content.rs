//! Content catalog source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Path to a catalog TOML file replacing the compiled-in tables.
    /// Empty means use the built-in catalog.
    #[serde(default)]
    pub catalog_path: String,
}

impl ContentConfig {
    pub fn catalog_override(&self) -> Option<PathBuf> {
        let trimmed = self.catalog_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
