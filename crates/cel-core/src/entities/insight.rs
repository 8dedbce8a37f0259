use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured per-sign insight block woven into the composed daily horoscope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignInsight {
    /// Opening statement about the sign's energy today.
    pub energy: String,
    pub focus: String,
    pub challenge: String,
    pub opportunity: String,
}

impl SignInsight {
    pub fn new(
        energy: impl Into<String>,
        focus: impl Into<String>,
        challenge: impl Into<String>,
        opportunity: impl Into<String>,
    ) -> Self {
        Self {
            energy: energy.into(),
            focus: focus.into(),
            challenge: challenge.into(),
            opportunity: opportunity.into(),
        }
    }
}
