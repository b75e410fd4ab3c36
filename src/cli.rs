use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

use crate::constants::player_url::DEFAULT_INDEX;
use crate::data_fetcher::models::{PlayerRef, SeasonType, StatCategory};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Stats table variant as written on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsChoice {
    /// Per-game averages
    Avg,
    /// Season totals
    Tot,
    /// Advanced metrics
    Adv,
}

impl From<StatsChoice> for StatCategory {
    fn from(choice: StatsChoice) -> Self {
        match choice {
            StatsChoice::Avg => StatCategory::Averages,
            StatsChoice::Tot => StatCategory::Totals,
            StatsChoice::Adv => StatCategory::Advanced,
        }
    }
}

/// NBA player career stats in your terminal
///
/// Fetches a player's page from Basketball Reference and prints one stats
/// table, season by season, with the career line at the bottom.
///
/// Players are looked up by name. When two players share a name prefix,
/// use -n to pick the second, third, ... player with that prefix.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Player's first name
    pub first_name: String,

    /// Player's last name
    pub last_name: String,

    /// Which stats table to show
    #[arg(short = 's', long = "stats", value_enum, default_value_t = StatsChoice::Avg)]
    pub stats: StatsChoice,

    /// Show playoff stats instead of the regular season
    #[arg(short = 'p', long = "playoffs")]
    pub playoffs: bool,

    /// Disambiguation index for players sharing a name prefix
    #[arg(
        short = 'n',
        long = "n",
        default_value_t = DEFAULT_INDEX,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub n: u32,

    /// Print the table without colors
    #[arg(long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings and exit
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// The requested player, with names lowercased for URL building
    pub fn player(&self) -> PlayerRef {
        PlayerRef::new(
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase(),
            self.n,
        )
    }

    pub fn category(&self) -> StatCategory {
        self.stats.into()
    }

    pub fn season_type(&self) -> SeasonType {
        SeasonType::from_playoffs(self.playoffs)
    }
}
