//! Assembles selected fragments into the text users read.

use std::sync::Arc;

use cel_core::entities::Ritual;
use cel_core::responses::{
    DailyHoroscope, DailyRitual, Digest, HoroscopeResponse, LuckyAttributes, RitualsResponse,
};
use cel_core::{CalendarDay, HoroscopeStyle, MoonPhase, ZodiacSign};

use crate::catalog::ContentCatalog;
use crate::digest::{self, SiteLinks};
use crate::lunar;
use crate::seed::Seed;

/// Pure composition over a shared, read-only catalog. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Composer {
    catalog: Arc<ContentCatalog>,
}

impl Composer {
    pub fn new(catalog: impl Into<Arc<ContentCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Lucky number, cosmic color and power time for one seed.
    #[must_use]
    pub fn lucky_attributes(&self, day: CalendarDay, seed: Seed) -> LuckyAttributes {
        let offset = (seed.value() + u64::from(day.day_of_month())) % 9;
        // `offset` is below 9.
        #[allow(clippy::cast_possible_truncation)]
        let number = offset as u32 + 1;
        LuckyAttributes {
            number,
            color: self.catalog.colors.pick(seed).clone(),
            power_time: self.catalog.power_times.pick(seed).clone(),
        }
    }

    /// The composed multi-paragraph forecast.
    ///
    /// Sky-wide fragments share the unlabelled day seed so every sign sees the
    /// same sky; the insight block and lucky attributes use the sign's seed.
    #[must_use]
    pub fn daily_horoscope(&self, sign: ZodiacSign, day: CalendarDay) -> DailyHoroscope {
        let sky = Seed::for_day(day);
        let seed = Seed::for_sign(day, sign);

        let energy = self.catalog.cosmic_energies.pick(sky);
        let planetary = self.catalog.planetary_influences.pick(sky);
        let theme = self.catalog.daily_themes.pick(sky);
        let insight = self.catalog.sign_insights.get(sign);
        let lucky = self.lucky_attributes(day, seed);

        let text = [
            format!(
                "Today, {energy} flows through your {sign} energy. {planetary}, creating a powerful \
                 alignment for {theme}. {}.",
                insight.energy
            ),
            String::new(),
            format!(
                "{}. The cosmic currents support {}, so trust your instincts and move forward \
                 with confidence.",
                insight.focus, insight.opportunity
            ),
            String::new(),
            format!(
                "{}. Remember that challenges are opportunities for growth, and your {sign} \
                 resilience will see you through.",
                insight.challenge
            ),
            String::new(),
            format!("**Lucky Number:** {}", lucky.number),
            format!("**Cosmic Color:** {}", lucky.color),
            format!("**Power Time:** {}", lucky.power_time),
        ]
        .join("\n");

        tracing::debug!(%sign, %day, %seed, "composed daily horoscope");
        DailyHoroscope {
            sign,
            date: day,
            text,
            lucky,
        }
    }

    /// One pre-authored paragraph for the sign, rotated by the sign's seed.
    #[must_use]
    pub fn sign_reading(&self, sign: ZodiacSign, day: CalendarDay) -> &str {
        self.catalog
            .sign_readings
            .get(sign)
            .pick(Seed::for_sign(day, sign))
    }

    #[must_use]
    pub fn horoscope(
        &self,
        sign: ZodiacSign,
        day: CalendarDay,
        style: HoroscopeStyle,
    ) -> HoroscopeResponse {
        match style {
            HoroscopeStyle::Daily => self.daily_horoscope(sign, day).into_response(),
            HoroscopeStyle::Brief => HoroscopeResponse {
                horoscope: self.sign_reading(sign, day).to_string(),
                sign,
                date: day,
            },
        }
    }

    #[must_use]
    pub fn rituals_for(&self, phase: MoonPhase) -> &[Ritual] {
        self.catalog.rituals.get(phase).items()
    }

    /// Every ritual suggested for the moon phase on `day`.
    #[must_use]
    pub fn rituals(&self, day: CalendarDay) -> RitualsResponse {
        let phase = lunar::moon_phase(day);
        RitualsResponse {
            date: day,
            phase,
            rituals: self.rituals_for(phase).to_vec(),
        }
    }

    #[must_use]
    pub fn ritual_of_the_day(&self, day: CalendarDay) -> DailyRitual {
        let phase = lunar::moon_phase(day);
        let ritual = self
            .catalog
            .rituals
            .get(phase)
            .pick(Seed::for_phase(day, phase))
            .clone();
        DailyRitual {
            date: day,
            phase,
            ritual,
        }
    }

    /// Render the e-mail digest for one sign. `recipient` fills the
    /// unsubscribe link; without one a placeholder is left for the mailer.
    #[must_use]
    pub fn digest(
        &self,
        sign: ZodiacSign,
        day: CalendarDay,
        links: &SiteLinks,
        recipient: Option<&str>,
    ) -> Digest {
        let energy = self
            .catalog
            .digest_energies
            .pick(Seed::from_raw(u64::from(day.day_of_month())));
        let message = self.catalog.digest_sign_messages.get(sign);
        let text = format!("{} {message}", digest::base_text(energy));
        let html = digest::render_html(links, sign, day, &text, recipient);

        Digest {
            sign,
            date: day,
            subject: digest::subject(day),
            text,
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn composer() -> Composer {
        Composer::new(ContentCatalog::builtin().unwrap())
    }

    fn new_years_day() -> CalendarDay {
        CalendarDay::from_ymd(2025, 1, 1).unwrap()
    }

    #[test]
    fn lucky_attributes_for_seed_533() {
        let lucky = composer().lucky_attributes(new_years_day(), Seed::from_raw(533));
        assert_eq!(
            lucky,
            LuckyAttributes {
                number: 4,
                color: "Red".into(),
                power_time: "Midday".into(),
            }
        );
    }

    #[test]
    fn aries_new_years_day_text() {
        let horoscope = composer().daily_horoscope(ZodiacSign::Aries, new_years_day());
        let expected = "Today, grounded wisdom and patient growth flows through your Aries energy. \
Venus brings harmony to relationships, creating a powerful alignment for nurturing existing \
connections. Your natural leadership shines today.

Take bold action on your goals. The cosmic currents support New ventures align with your \
pioneering spirit, so trust your instincts and move forward with confidence.

Practice patience with slower-moving situations. Remember that challenges are opportunities \
for growth, and your Aries resilience will see you through.

**Lucky Number:** 4
**Cosmic Color:** Red
**Power Time:** Midday";
        assert_eq!(horoscope.text, expected);
        assert_eq!(horoscope.lucky.number, 4);
    }

    #[test]
    fn brief_style_returns_one_reading() {
        let composer = composer();
        let response = composer.horoscope(ZodiacSign::Aries, new_years_day(), HoroscopeStyle::Brief);
        // 533 mod 3 == 2
        assert!(response.horoscope.starts_with("The stars align to boost your confidence"));
        assert_eq!(response.date.iso(), "2025-01-01");
    }

    #[test]
    fn ritual_of_the_day_belongs_to_the_phase() {
        let composer = composer();
        let mut day = new_years_day();
        for _ in 0..60 {
            let daily = composer.ritual_of_the_day(day);
            assert_eq!(daily.phase, lunar::moon_phase(day));
            assert!(composer.rituals_for(daily.phase).contains(&daily.ritual));
            day = day.succ().unwrap();
        }
    }

    #[test]
    fn rituals_lists_three_per_phase() {
        let response = composer().rituals(new_years_day());
        assert_eq!(response.rituals.len(), 3);
        assert_eq!(response.phase, lunar::moon_phase(new_years_day()));
    }

    #[test]
    fn digest_combines_base_text_and_sign_message() {
        let links = SiteLinks::new("https://example.com", "Celestial Calendar");
        let day = CalendarDay::from_ymd(2025, 6, 3).unwrap();
        let digest = composer().digest(ZodiacSign::Gemini, day, &links, Some("a@b.co"));

        assert_eq!(
            digest.text,
            "Today's cosmic energy is influenced by Mars energy fuels passion and determination. \
             The universe is aligning to support your highest good. Trust in the divine timing \
             and embrace the opportunities that come your way. Mercurial Gemini, your curiosity \
             and adaptability shine. Embrace new ideas and connections."
        );
        assert_eq!(digest.subject, "🌟 Your Daily Horoscope - 6/3/2025");
        assert!(digest.html.contains("unsubscribe?email=a%40b.co"));
    }
}
