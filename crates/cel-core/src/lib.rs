//! # cel-core
//!
//! Core types and error types for Celestial.
//!
//! This crate provides the foundational types shared across all Celestial crates:
//! - The twelve zodiac signs, moon phases and content categories
//! - Day-granularity calendar values and birth times
//! - Pre-authored content structs (sign insights, rituals)
//! - Cross-cutting error types
//! - JSON response types returned by the HTTP API and the CLI

pub mod calendar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use calendar::{BirthTime, CalendarDay};
pub use enums::{ContentCategory, HoroscopeStyle, MoonPhase, ZodiacSign};
pub use errors::CoreError;
