//! Response types returned as JSON by the HTTP API and the `cel` binary.
//!
//! Field names are camelCase on the wire to match the web front end.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;
use crate::entities::Ritual;
use crate::enums::{ContentCategory, MoonPhase, ZodiacSign};

/// Response from `GET /api/horoscope`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HoroscopeResponse {
    pub horoscope: String,
    pub sign: ZodiacSign,
    pub date: CalendarDay,
}

/// Auxiliary facts derived from the same seed as the horoscope text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LuckyAttributes {
    /// Always in `1..=9`.
    pub number: u32,
    pub color: String,
    pub power_time: String,
}

/// A fully composed daily horoscope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyHoroscope {
    pub sign: ZodiacSign,
    pub date: CalendarDay,
    pub text: String,
    pub lucky: LuckyAttributes,
}

impl DailyHoroscope {
    #[must_use]
    pub fn into_response(self) -> HoroscopeResponse {
        HoroscopeResponse {
            horoscope: self.text,
            sign: self.sign,
            date: self.date,
        }
    }
}

/// Response from `POST /api/signs`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BirthSigns {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
}

/// Response from `GET /api/moon`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MoonReport {
    pub date: CalendarDay,
    pub phase: MoonPhase,
    pub name: String,
    pub emoji: String,
    pub description: String,
    /// Position within the synodic month, in `[0, 1)`.
    pub fraction: f64,
}

/// Response from `GET /api/rituals`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RitualsResponse {
    pub date: CalendarDay,
    pub phase: MoonPhase,
    pub rituals: Vec<Ritual>,
}

/// Response from `GET /api/rituals/today`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyRitual {
    pub date: CalendarDay,
    pub phase: MoonPhase,
    pub ritual: Ritual,
}

/// Rendered daily e-mail digest for one sign. Delivery is not our concern.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Digest {
    pub sign: ZodiacSign,
    pub date: CalendarDay,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Response from `POST /api/subscribe/validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubscriptionResponse {
    pub email: String,
    pub sign: ZodiacSign,
    pub message: String,
}

/// One row of `cel catalog check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TableSummary {
    pub category: ContentCategory,
    pub entries: usize,
}

/// Response from `cel catalog check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogReport {
    pub source: String,
    pub tables: Vec<TableSummary>,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
