use crate::constants::table::{LEAGUE_COLUMNS, NBA_LEAGUE, SEASON_COLUMN, TEAM_SUMMARY_MARKERS};
use crate::data_fetcher::models::{Cell, StatsTable};
use tracing::debug;

/// Removes rows that are not NBA seasons or the career summary.
///
/// A row is dropped when any of these hold:
/// - its league is not "NBA" (overseas seasons, and blank trailer rows);
/// - its season cell contains "season" or "team totals" (team summary rows
///   added when a player changed teams);
/// - its season cell is empty (the blank separator after the career row).
///
/// Checks whose column is missing from the table are skipped. Applying the
/// filter twice gives the same result as applying it once.
///
/// # Arguments
/// * `table` - Stats table as extracted from the page
///
/// # Returns
/// * `StatsTable` - Season rows plus the trailing career row, if present
pub fn filter_rows(table: StatsTable) -> StatsTable {
    let league_index = LEAGUE_COLUMNS
        .iter()
        .find_map(|name| table.column_index(name));
    let season_index = table.column_index(SEASON_COLUMN);
    let before = table.row_count();

    let table = table.retain_rows(|row| {
        let league_ok = league_index.is_none_or(|i| is_nba(&row[i]));
        let season_ok = season_index.is_none_or(|i| is_real_season(&row[i]));
        league_ok && season_ok
    });

    debug!(
        "Row filter kept {} of {} rows",
        table.row_count(),
        before
    );
    table
}

fn is_nba(league: &Cell) -> bool {
    league.as_text() == Some(NBA_LEAGUE)
}

fn is_real_season(season: &Cell) -> bool {
    if season.is_empty() {
        return false;
    }
    let season = season.to_string();
    !TEAM_SUMMARY_MARKERS
        .iter()
        .any(|marker| season.contains(marker))
}
