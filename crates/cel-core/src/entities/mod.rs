//! Pre-authored content structs stored in the content catalog.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be loaded from a catalog TOML file and returned verbatim in API responses.

mod insight;
mod ritual;

pub use insight::SignInsight;
pub use ritual::Ritual;
