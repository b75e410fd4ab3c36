//! NBA player career stats in the terminal
//!
//! This library fetches a player's page from Basketball Reference, picks one
//! stats table, drops rows and columns that do not belong in a season-by-season
//! view and renders the result as a styled terminal table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hoopstats::data_fetcher::api::create_http_client_with_timeout;
//! use hoopstats::data_fetcher::fetch_player_stats;
//! use hoopstats::data_fetcher::models::{PlayerRef, SeasonType, StatCategory};
//! use hoopstats::stats_ui::StatsPage;
//! use hoopstats::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let player = PlayerRef::new("stephen", "curry", 1);
//!
//!     // Fetch and clean the regular season per-game table
//!     let table = fetch_player_stats(
//!         &client,
//!         &config,
//!         &player,
//!         StatCategory::Averages,
//!         SeasonType::Regular,
//!     )
//!     .await?;
//!
//!     // Render the page to stdout
//!     let page = StatsPage::new(table, &player, StatCategory::Averages, SeasonType::Regular);
//!     page.render_buffered(&mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod stats_ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Cell, PlayerRef, SeasonType, StatCategory, StatsTable};
pub use data_fetcher::{clean_stats_table, fetch_player_stats};
pub use error::AppError;
pub use stats_ui::{RowStyle, StatsPage};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
