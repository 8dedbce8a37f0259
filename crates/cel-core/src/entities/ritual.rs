use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lunar ritual suggestion tied to one moon phase.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ritual {
    pub emoji: String,
    pub title: String,
    pub description: String,
    /// Short energy label, e.g. `Letting Go & Renewal`.
    pub energy: String,
    pub affirmation: String,
}
