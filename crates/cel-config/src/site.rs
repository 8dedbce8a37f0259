//! Public site settings used when rendering links into e-mail digests.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_url() -> String {
    String::from("https://thecelestialcalendar.com")
}

fn default_brand() -> String {
    String::from("Celestial Calendar")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Public base URL, without a trailing slash.
    #[serde(default = "default_url")]
    pub url: String,

    /// Brand name shown in digest headers and subjects.
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            brand: default_brand(),
        }
    }
}

impl SiteConfig {
    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "site.url",
                format!("'{}' must start with http:// or https://", self.url),
            ));
        }
        Ok(())
    }
}
