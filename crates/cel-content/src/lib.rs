//! # cel-content
//!
//! Deterministic daily content selection for Celestial.
//!
//! Every output is a pure function of a calendar day and an optional label:
//!
//! ```text
//! (day, label) -> Seed -> index = seed mod len -> variant -> composed text
//! ```
//!
//! The [`ContentCatalog`] holds the pre-authored tables and is validated once
//! at startup; the [`Composer`] turns selections into horoscopes, rituals and
//! digest e-mails. Lunar phase, birth-chart signs and sign-up validation live
//! alongside since they feed the same outputs.
//!
//! ```
//! use cel_content::{Composer, ContentCatalog};
//! use cel_core::{CalendarDay, ZodiacSign};
//!
//! let composer = Composer::new(ContentCatalog::builtin().unwrap());
//! let day = CalendarDay::parse("2025-01-01").unwrap();
//! let horoscope = composer.daily_horoscope(ZodiacSign::Aries, day);
//! assert_eq!(horoscope.lucky.number, 4);
//! ```

pub mod birth_chart;
mod builtin;
pub mod catalog;
pub mod composer;
pub mod digest;
pub mod lunar;
pub mod seed;
pub mod subscription;
pub mod table;

pub use catalog::{CatalogError, CatalogSource, ContentCatalog};
pub use composer::Composer;
pub use digest::SiteLinks;
pub use seed::Seed;
pub use subscription::{Subscription, SubscriptionRequest};
pub use table::{ContentTable, KeyedTable, PhaseTable, Selection, SignTable, select};
