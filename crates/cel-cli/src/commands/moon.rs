use cel_content::lunar;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::DateArgs;
use crate::output::output;

/// Handle `cel moon`.
pub fn handle(args: &DateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let day = bootstrap::resolve_day(args.date.as_deref())?;
    output(&lunar::moon_report(day), flags.format)
}
