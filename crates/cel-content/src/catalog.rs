//! The content catalog: every table the composer draws from, as one value.
//!
//! A catalog is either the compiled-in one ([`ContentCatalog::builtin`]) or
//! loaded from a TOML file. Loading validates every table up front so a
//! broken deployment fails at startup, never mid-request.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use cel_core::entities::{Ritual, SignInsight};
use cel_core::responses::{CatalogReport, TableSummary};
use cel_core::{ContentCategory, CoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin;
use crate::table::{ContentTable, KeyedTable, PhaseTable, SignTable};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Where a catalog came from, for logs and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
    Inline,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("inline"),
        }
    }
}

/// Number of cosmic colors; the lucky color is `colors[seed mod 8]`.
pub const COLOR_COUNT: usize = 8;

/// Number of power times; the power time is `power_times[seed mod 4]`.
pub const POWER_TIME_COUNT: usize = 4;

fn string_table(
    category: ContentCategory,
    items: &[&str],
    len: usize,
) -> Result<ContentTable<String>, CoreError> {
    ContentTable::with_len(category, items.iter().map(|s| (*s).to_string()).collect(), len)
}

/// Every content table, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    pub(crate) cosmic_energies: ContentTable<String>,
    pub(crate) planetary_influences: ContentTable<String>,
    pub(crate) daily_themes: ContentTable<String>,
    pub(crate) sign_insights: SignTable<SignInsight>,
    pub(crate) sign_readings: SignTable<ContentTable<String>>,
    pub(crate) colors: ContentTable<String>,
    pub(crate) power_times: ContentTable<String>,
    pub(crate) digest_energies: ContentTable<String>,
    pub(crate) digest_sign_messages: SignTable<String>,
    pub(crate) rituals: PhaseTable<ContentTable<Ritual>>,
    source: CatalogSource,
}

impl ContentCatalog {
    /// The compiled-in catalog.
    ///
    /// The built-in tables are authored to be complete, so a failure here is
    /// a programming error surfaced as [`CoreError::Configuration`].
    pub fn builtin() -> Result<Self, CoreError> {
        Ok(Self {
            cosmic_energies: ContentTable::from_strs(
                ContentCategory::CosmicEnergy,
                builtin::COSMIC_ENERGIES,
            )?,
            planetary_influences: ContentTable::from_strs(
                ContentCategory::PlanetaryInfluence,
                builtin::PLANETARY_INFLUENCES,
            )?,
            daily_themes: ContentTable::from_strs(
                ContentCategory::DailyTheme,
                builtin::DAILY_THEMES,
            )?,
            sign_insights: SignTable::from_fn(builtin::sign_insight),
            sign_readings: SignTable::try_from_fn(|sign| {
                ContentTable::from_strs(ContentCategory::SignReading, builtin::sign_readings(sign))
            })?,
            colors: string_table(ContentCategory::Color, builtin::COLORS, COLOR_COUNT)?,
            power_times: string_table(
                ContentCategory::PowerTime,
                builtin::POWER_TIMES,
                POWER_TIME_COUNT,
            )?,
            digest_energies: ContentTable::from_strs(
                ContentCategory::DigestEnergy,
                builtin::DIGEST_ENERGIES,
            )?,
            digest_sign_messages: SignTable::from_fn(|sign| {
                builtin::digest_sign_message(sign).to_string()
            }),
            rituals: PhaseTable::try_from_fn(|phase| {
                ContentTable::new(ContentCategory::Ritual, builtin::rituals(phase))
            })?,
            source: CatalogSource::Builtin,
        })
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;
        Ok(file.into_catalog(CatalogSource::Inline)?)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let input = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&input)?;
        let catalog = file.into_catalog(CatalogSource::File(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "content catalog loaded");
        Ok(catalog)
    }

    /// Render this catalog in the file format accepted by [`Self::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(&CatalogFile::from_catalog(self))?)
    }

    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    #[must_use]
    pub const fn sign_insights(&self) -> &SignTable<SignInsight> {
        &self.sign_insights
    }

    #[must_use]
    pub const fn colors(&self) -> &ContentTable<String> {
        &self.colors
    }

    #[must_use]
    pub const fn power_times(&self) -> &ContentTable<String> {
        &self.power_times
    }

    /// Number of variants stored for a category. Keyed tables count every
    /// variant under every key.
    #[must_use]
    pub fn table_len(&self, category: ContentCategory) -> usize {
        match category {
            ContentCategory::CosmicEnergy => self.cosmic_energies.len(),
            ContentCategory::PlanetaryInfluence => self.planetary_influences.len(),
            ContentCategory::DailyTheme => self.daily_themes.len(),
            ContentCategory::SignInsight => self.sign_insights.len(),
            ContentCategory::SignReading => {
                self.sign_readings.iter().map(|(_, table)| table.len()).sum()
            }
            ContentCategory::Color => self.colors.len(),
            ContentCategory::PowerTime => self.power_times.len(),
            ContentCategory::DigestEnergy => self.digest_energies.len(),
            ContentCategory::DigestSignMessage => self.digest_sign_messages.len(),
            ContentCategory::Ritual => self.rituals.iter().map(|(_, table)| table.len()).sum(),
        }
    }

    #[must_use]
    pub fn report(&self) -> CatalogReport {
        CatalogReport {
            source: self.source.to_string(),
            tables: ContentCategory::ALL
                .into_iter()
                .map(|category| TableSummary {
                    category,
                    entries: self.table_len(category),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// On-disk shape of a catalog. Keyed tables use sign or phase labels as keys.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    cosmic_energies: Vec<String>,
    planetary_influences: Vec<String>,
    daily_themes: Vec<String>,
    colors: Vec<String>,
    power_times: Vec<String>,
    digest_energies: Vec<String>,
    sign_insights: BTreeMap<String, SignInsight>,
    sign_readings: BTreeMap<String, Vec<String>>,
    digest_sign_messages: BTreeMap<String, String>,
    rituals: BTreeMap<String, Vec<Ritual>>,
}

impl CatalogFile {
    fn into_catalog(self, source: CatalogSource) -> Result<ContentCatalog, CoreError> {
        let sign_readings = self
            .sign_readings
            .into_iter()
            .map(|(label, items)| {
                ContentTable::new(ContentCategory::SignReading, items).map(|table| (label, table))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        let rituals = self
            .rituals
            .into_iter()
            .map(|(label, items)| {
                ContentTable::new(ContentCategory::Ritual, items).map(|table| (label, table))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(ContentCatalog {
            cosmic_energies: ContentTable::new(ContentCategory::CosmicEnergy, self.cosmic_energies)?,
            planetary_influences: ContentTable::new(
                ContentCategory::PlanetaryInfluence,
                self.planetary_influences,
            )?,
            daily_themes: ContentTable::new(ContentCategory::DailyTheme, self.daily_themes)?,
            sign_insights: KeyedTable::from_labelled(
                ContentCategory::SignInsight,
                self.sign_insights,
            )?,
            sign_readings: KeyedTable::from_labelled(ContentCategory::SignReading, sign_readings)?,
            colors: ContentTable::with_len(ContentCategory::Color, self.colors, COLOR_COUNT)?,
            power_times: ContentTable::with_len(
                ContentCategory::PowerTime,
                self.power_times,
                POWER_TIME_COUNT,
            )?,
            digest_energies: ContentTable::new(ContentCategory::DigestEnergy, self.digest_energies)?,
            digest_sign_messages: KeyedTable::from_labelled(
                ContentCategory::DigestSignMessage,
                self.digest_sign_messages,
            )?,
            rituals: KeyedTable::from_labelled(ContentCategory::Ritual, rituals)?,
            source,
        })
    }

    fn from_catalog(catalog: &ContentCatalog) -> Self {
        Self {
            cosmic_energies: catalog.cosmic_energies.items().to_vec(),
            planetary_influences: catalog.planetary_influences.items().to_vec(),
            daily_themes: catalog.daily_themes.items().to_vec(),
            colors: catalog.colors.items().to_vec(),
            power_times: catalog.power_times.items().to_vec(),
            digest_energies: catalog.digest_energies.items().to_vec(),
            sign_insights: catalog
                .sign_insights
                .iter()
                .map(|(sign, insight)| (sign.to_string(), insight.clone()))
                .collect(),
            sign_readings: catalog
                .sign_readings
                .iter()
                .map(|(sign, table)| (sign.to_string(), table.items().to_vec()))
                .collect(),
            digest_sign_messages: catalog
                .digest_sign_messages
                .iter()
                .map(|(sign, message)| (sign.to_string(), message.clone()))
                .collect(),
            rituals: catalog
                .rituals
                .iter()
                .map(|(phase, table)| (phase.to_string(), table.items().to_vec()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cel_core::{MoonPhase, ZodiacSign};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_has_expected_table_sizes() {
        let catalog = ContentCatalog::builtin().unwrap();
        assert_eq!(catalog.table_len(ContentCategory::CosmicEnergy), 12);
        assert_eq!(catalog.table_len(ContentCategory::PlanetaryInfluence), 10);
        assert_eq!(catalog.table_len(ContentCategory::DailyTheme), 12);
        assert_eq!(catalog.table_len(ContentCategory::SignInsight), 12);
        assert_eq!(catalog.table_len(ContentCategory::SignReading), 36);
        assert_eq!(catalog.table_len(ContentCategory::Color), 8);
        assert_eq!(catalog.table_len(ContentCategory::PowerTime), 4);
        assert_eq!(catalog.table_len(ContentCategory::DigestEnergy), 8);
        assert_eq!(catalog.table_len(ContentCategory::DigestSignMessage), 12);
        assert_eq!(catalog.table_len(ContentCategory::Ritual), 24);
        assert_eq!(catalog.source(), &CatalogSource::Builtin);
    }

    #[test]
    fn builtin_insights_belong_to_their_own_sign() {
        let catalog = ContentCatalog::builtin().unwrap();
        let aries = catalog.sign_insights().get(ZodiacSign::Aries);
        let pisces = catalog.sign_insights().get(ZodiacSign::Pisces);
        assert_eq!(aries.energy, "Your natural leadership shines today");
        assert_eq!(pisces.challenge, "Maintain healthy boundaries");
    }

    #[test]
    fn builtin_survives_toml_roundtrip() {
        let catalog = ContentCatalog::builtin().unwrap();
        let text = catalog.to_toml_string().unwrap();
        let reloaded = ContentCatalog::from_toml_str(&text).unwrap();

        assert_eq!(reloaded.source(), &CatalogSource::Inline);
        assert_eq!(reloaded.report().tables, catalog.report().tables);
        assert_eq!(
            reloaded.rituals.get(MoonPhase::Full),
            catalog.rituals.get(MoonPhase::Full)
        );
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        let err = ContentCatalog::from_toml_str("cosmic_energies = [\"x\"]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn report_lists_every_category() {
        let report = ContentCatalog::builtin().unwrap().report();
        assert_eq!(report.source, "builtin");
        assert_eq!(report.tables.len(), ContentCategory::ALL.len());
    }
}
