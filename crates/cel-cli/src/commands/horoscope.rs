use cel_config::CelConfig;
use cel_core::{HoroscopeStyle, ZodiacSign};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::HoroscopeArgs;
use crate::output::output;

/// Handle `cel horoscope`.
pub fn handle(args: &HoroscopeArgs, config: &CelConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sign: ZodiacSign = args.sign.parse()?;
    let day = bootstrap::resolve_day(args.date.date.as_deref())?;
    let composer = bootstrap::composer(config)?;

    if args.details {
        return output(&composer.daily_horoscope(sign, day), flags.format);
    }

    let style = if args.brief {
        HoroscopeStyle::Brief
    } else {
        HoroscopeStyle::Daily
    };
    output(&composer.horoscope(sign, day, style), flags.format)
}
