//! Zodiac signs, moon phases, content categories and horoscope styles.
//!
//! Signs serialize with their display name (`"Taurus"`), everything else uses
//! kebab- or snake-case. Every enum exposes `ALL` in its canonical order so
//! per-key tables can be checked for totality.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ZodiacSign
// ---------------------------------------------------------------------------

/// One of the twelve canonical sign labels. A lookup key, not a computed
/// astronomical position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in zodiac order, starting at the vernal equinox.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored. Unknown labels are
    /// rejected, never mapped to a default sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(CoreError::invalid_input("zodiac sign is required"));
        }
        Self::ALL
            .into_iter()
            .find(|sign| sign.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::invalid_input(format!("unknown zodiac sign '{label}'")))
    }
}

// ---------------------------------------------------------------------------
// MoonPhase
// ---------------------------------------------------------------------------

/// One of the eight named lunar phases.
///
/// ```text
/// new → waxing-crescent → first-quarter → waxing-gibbous
///     → full → waning-gibbous → last-quarter → waning-crescent → new
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [Self; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::WaxingCrescent => "waxing-crescent",
            Self::FirstQuarter => "first-quarter",
            Self::WaxingGibbous => "waxing-gibbous",
            Self::Full => "full",
            Self::WaningGibbous => "waning-gibbous",
            Self::LastQuarter => "last-quarter",
            Self::WaningCrescent => "waning-crescent",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::New => "A time for new beginnings and setting intentions",
            Self::WaxingCrescent => "A time for planning and gathering energy",
            Self::FirstQuarter => "A time for action and decision-making",
            Self::WaxingGibbous => "A time for refinement and fine-tuning",
            Self::Full => "A time for celebration, release, and illumination",
            Self::WaningGibbous => "A time for gratitude and sharing",
            Self::LastQuarter => "A time for forgiveness and letting go",
            Self::WaningCrescent => "A time for rest, reflection, and preparation",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoonPhase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::invalid_input(format!("unknown moon phase '{label}'")))
    }
}

// ---------------------------------------------------------------------------
// ContentCategory
// ---------------------------------------------------------------------------

/// Named content tables in the catalog. Used for error reporting and for
/// table introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    CosmicEnergy,
    PlanetaryInfluence,
    DailyTheme,
    SignInsight,
    SignReading,
    Color,
    PowerTime,
    DigestEnergy,
    DigestSignMessage,
    Ritual,
}

impl ContentCategory {
    pub const ALL: [Self; 10] = [
        Self::CosmicEnergy,
        Self::PlanetaryInfluence,
        Self::DailyTheme,
        Self::SignInsight,
        Self::SignReading,
        Self::Color,
        Self::PowerTime,
        Self::DigestEnergy,
        Self::DigestSignMessage,
        Self::Ritual,
    ];

    /// Table name as it appears in a catalog TOML file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CosmicEnergy => "cosmic_energies",
            Self::PlanetaryInfluence => "planetary_influences",
            Self::DailyTheme => "daily_themes",
            Self::SignInsight => "sign_insights",
            Self::SignReading => "sign_readings",
            Self::Color => "colors",
            Self::PowerTime => "power_times",
            Self::DigestEnergy => "digest_energies",
            Self::DigestSignMessage => "digest_sign_messages",
            Self::Ritual => "rituals",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HoroscopeStyle
// ---------------------------------------------------------------------------

/// Which horoscope text an API caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HoroscopeStyle {
    /// Composed multi-paragraph forecast with lucky attributes.
    #[default]
    Daily,
    /// Single pre-authored paragraph for the sign.
    Brief,
}

impl HoroscopeStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Brief => "brief",
        }
    }
}

impl fmt::Display for HoroscopeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoroscopeStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "brief" => Ok(Self::Brief),
            other => Err(CoreError::invalid_input(format!(
                "unknown horoscope style '{other}' (expected 'daily' or 'brief')"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
