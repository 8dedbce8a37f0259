//! Validation of daily-digest sign-ups. Persistence is left to the caller.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use cel_core::responses::SubscriptionResponse;
use cel_core::{CoreError, ZodiacSign};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern is a valid regex")
});

/// Raw sign-up form as posted by the web front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub zodiac_sign: String,
}

/// A sign-up that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
    pub sign: ZodiacSign,
}

impl SubscriptionRequest {
    pub fn new(email: impl Into<String>, zodiac_sign: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            zodiac_sign: zodiac_sign.into(),
        }
    }

    /// Check required fields, the e-mail shape and the sign label.
    pub fn validate(&self) -> Result<Subscription, CoreError> {
        let email = self.email.trim();
        let label = self.zodiac_sign.trim();
        if email.is_empty() || label.is_empty() {
            return Err(CoreError::invalid_input(
                "Email and zodiac sign are required",
            ));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(CoreError::invalid_input(
                "Please enter a valid email address",
            ));
        }
        let sign = label
            .parse::<ZodiacSign>()
            .map_err(|_| CoreError::invalid_input("Please select a valid zodiac sign"))?;

        Ok(Subscription {
            email: email.to_string(),
            sign,
        })
    }
}

impl Subscription {
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "You've been subscribed to daily {} horoscopes! Check your email tomorrow morning \
             for your first cosmic forecast.",
            self.sign
        )
    }

    #[must_use]
    pub fn into_response(self) -> SubscriptionResponse {
        let message = self.confirmation();
        SubscriptionResponse {
            email: self.email,
            sign: self.sign,
            message,
        }
    }
}
