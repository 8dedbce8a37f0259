use clap::{Args, Subcommand};

use crate::cli::subcommands::CatalogCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Today's horoscope for a sign.
    Horoscope(HoroscopeArgs),
    /// Sun and moon sign for a birth date and time.
    Signs(SignsArgs),
    /// Lunar phase for a day.
    Moon(DateArgs),
    /// Rituals for the day's lunar phase.
    Rituals(RitualsArgs),
    /// Render the daily e-mail digest for a sign.
    Digest(DigestArgs),
    /// Content catalog tools.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct DateArgs {
    /// Day to compute for (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HoroscopeArgs {
    /// Zodiac sign, case-insensitive.
    pub sign: String,

    #[command(flatten)]
    pub date: DateArgs,

    /// Return the single-paragraph reading instead of the composed forecast.
    #[arg(long)]
    pub brief: bool,

    /// Include lucky number, color and power time as separate fields.
    #[arg(long, conflicts_with = "brief")]
    pub details: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SignsArgs {
    /// Birth date (YYYY-MM-DD).
    pub date: String,
    /// Birth time (HH:MM, 24-hour).
    pub time: String,
}

#[derive(Clone, Debug, Args)]
pub struct RitualsArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Only the ritual of the day.
    #[arg(long)]
    pub today: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DigestArgs {
    /// Zodiac sign, case-insensitive.
    pub sign: String,

    #[command(flatten)]
    pub date: DateArgs,

    /// Recipient address for the unsubscribe link.
    #[arg(long)]
    pub email: Option<String>,
}
