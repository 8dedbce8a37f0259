//! Daily e-mail digest rendering. Delivery happens elsewhere.

use cel_core::{CalendarDay, ZodiacSign};

/// Placeholder left in the unsubscribe link when no recipient is known yet.
pub const UNSUBSCRIBE_PLACEHOLDER: &str = "UNSUBSCRIBE_EMAIL";

/// Branding and link targets embedded in the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    base_url: String,
    brand: String,
}

impl SiteLinks {
    pub fn new(base_url: impl Into<String>, brand: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            brand: brand.into(),
        }
    }

    #[must_use]
    pub fn horoscope_url(&self) -> String {
        format!("{}/horoscope", self.base_url)
    }

    /// Unsubscribe link for `recipient`, URL-encoded.
    #[must_use]
    pub fn unsubscribe_url(&self, recipient: Option<&str>) -> String {
        let email = recipient.map_or_else(
            || UNSUBSCRIBE_PLACEHOLDER.to_string(),
            |email| urlencoding::encode(email).into_owned(),
        );
        format!("{}/unsubscribe?email={email}", self.base_url)
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }
}

#[must_use]
pub fn subject(day: CalendarDay) -> String {
    format!(
        "🌟 Your Daily Horoscope - {}/{}/{}",
        day.month(),
        day.day_of_month(),
        day.year()
    )
}

/// The sky-wide paragraph every subscriber receives before their sign message.
#[must_use]
pub fn base_text(energy: &str) -> String {
    format!(
        "Today's cosmic energy is influenced by {energy}. The universe is aligning to support \
         your highest good. Trust in the divine timing and embrace the opportunities that come \
         your way."
    )
}

pub(crate) fn render_html(
    links: &SiteLinks,
    sign: ZodiacSign,
    day: CalendarDay,
    body: &str,
    recipient: Option<&str>,
) -> String {
    let brand = escape_html(links.brand());
    let date = day.long_form();
    let body = escape_html(body);
    let horoscope_url = escape_html(&links.horoscope_url());
    let unsubscribe_url = escape_html(&links.unsubscribe_url(recipient));

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Your Daily Horoscope</title>
  <style>
    body {{ font-family: 'Georgia', serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }}
    .container {{ background: white; border-radius: 15px; padding: 30px; box-shadow: 0 10px 30px rgba(0,0,0,0.1); }}
    .header {{ text-align: center; margin-bottom: 30px; }}
    .header h1 {{ color: #4a5568; margin: 0; font-size: 28px; }}
    .date {{ color: #718096; font-style: italic; margin-top: 5px; }}
    .zodiac-sign {{ background: linear-gradient(135deg, #ffd700, #ffed4e); color: #2d3748; padding: 10px 20px; border-radius: 25px; display: inline-block; font-weight: bold; margin-bottom: 20px; }}
    .horoscope {{ background: #f7fafc; padding: 25px; border-radius: 10px; border-left: 4px solid #667eea; margin: 20px 0; font-size: 16px; }}
    .footer {{ text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #e2e8f0; color: #718096; font-size: 14px; }}
    .link {{ color: #667eea; text-decoration: none; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🌟 {brand}</h1>
      <div class="date">{date}</div>
    </div>
    <div style="text-align: center;">
      <div class="zodiac-sign">{sign}</div>
    </div>
    <div class="horoscope">
      {body}
    </div>
    <div class="footer">
      <p>Thank you for connecting with the cosmos! 🌙✨</p>
      <p>
        <a href="{horoscope_url}" class="link">View Full Horoscope</a> |
        <a href="{unsubscribe_url}" class="link">Unsubscribe</a>
      </p>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Escape text for HTML element content and attribute values.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
