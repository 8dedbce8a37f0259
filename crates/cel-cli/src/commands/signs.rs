use cel_content::birth_chart;
use cel_core::{BirthTime, CalendarDay};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SignsArgs;
use crate::output::output;

/// Handle `cel signs`.
pub fn handle(args: &SignsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let day = CalendarDay::parse(&args.date)?;
    let time = BirthTime::parse(&args.time)?;
    output(&birth_chart::signs(day, time), flags.format)
}
