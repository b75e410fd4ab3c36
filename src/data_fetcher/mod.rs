pub mod api;
pub mod models;
pub mod processors;
pub mod table_extractor;

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use api::{build_player_url, fetch_page};
use models::{PlayerRef, SeasonType, StatCategory, StatsTable};
use processors::{filter_columns, filter_rows, select_table};
use table_extractor::extract_tables;

pub use models::Cell;

/// Fetches a player's page and returns the cleaned stats table.
///
/// Builds the player URL from the configured base URL, fetches the page,
/// extracts its tables and hands them to [`clean_stats_table`].
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `config` - Configuration holding the base URL
/// * `player` - Player to look up
/// * `category` - Averages, totals or advanced
/// * `season_type` - Regular season or playoffs
///
/// # Returns
/// * `Result<StatsTable, AppError>` - Cleaned table or the first error hit
#[instrument(skip(client, config))]
pub async fn fetch_player_stats(
    client: &Client,
    config: &Config,
    player: &PlayerRef,
    category: StatCategory,
    season_type: SeasonType,
) -> Result<StatsTable, AppError> {
    let url = build_player_url(&config.base_url, player);
    let html = fetch_page(client, &url).await?;
    let tables = extract_tables(&html)?;

    let table = clean_stats_table(tables, category, season_type)?;
    info!(
        "Loaded {} {} rows for {}",
        table.row_count(),
        category,
        player.display_name()
    );
    Ok(table)
}

/// Picks the requested table from the page tables and strips rows and
/// columns that are not wanted in the output.
///
/// # Errors
/// [`AppError::LayoutMismatch`] if the page does not have the requested table.
pub fn clean_stats_table(
    tables: Vec<StatsTable>,
    category: StatCategory,
    season_type: SeasonType,
) -> Result<StatsTable, AppError> {
    let table = select_table(tables, category, season_type)?;
    Ok(filter_columns(filter_rows(table)))
}
