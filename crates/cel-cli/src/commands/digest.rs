use cel_config::CelConfig;
use cel_content::SiteLinks;
use cel_core::ZodiacSign;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::DigestArgs;
use crate::output::output;

/// Handle `cel digest`.
pub fn handle(args: &DigestArgs, config: &CelConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sign: ZodiacSign = args.sign.parse()?;
    let day = bootstrap::resolve_day(args.date.date.as_deref())?;
    let composer = bootstrap::composer(config)?;
    let links = SiteLinks::new(config.site.base_url(), config.site.brand.clone());

    let digest = composer.digest(sign, day, &links, args.email.as_deref());
    output(&digest, flags.format)
}
