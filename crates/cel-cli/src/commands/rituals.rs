use cel_config::CelConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RitualsArgs;
use crate::output::output;

/// Handle `cel rituals`.
pub fn handle(args: &RitualsArgs, config: &CelConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let day = bootstrap::resolve_day(args.date.date.as_deref())?;
    let composer = bootstrap::composer(config)?;

    if args.today {
        output(&composer.ritual_of_the_day(day), flags.format)
    } else {
        output(&composer.rituals(day), flags.format)
    }
}
