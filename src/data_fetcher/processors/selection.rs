use crate::data_fetcher::models::{SeasonType, StatCategory, StatsTable};
use crate::error::AppError;

/// Position of the wanted stats table among the tables on a player page.
///
/// The player page lists per-game, totals and advanced tables, each with
/// its playoff variant right after the regular season one. A layout change
/// on the page side only needs this mapping updated.
///
/// # Examples
///
/// ```rust
/// use hoopstats::data_fetcher::models::{SeasonType, StatCategory};
/// use hoopstats::data_fetcher::processors::table_index;
///
/// assert_eq!(table_index(StatCategory::Totals, SeasonType::Regular), 2);
/// assert_eq!(table_index(StatCategory::Advanced, SeasonType::Playoffs), 5);
/// ```
pub fn table_index(category: StatCategory, season_type: SeasonType) -> usize {
    match (category, season_type) {
        (StatCategory::Averages, SeasonType::Regular) => 0,
        (StatCategory::Averages, SeasonType::Playoffs) => 1,
        (StatCategory::Totals, SeasonType::Regular) => 2,
        (StatCategory::Totals, SeasonType::Playoffs) => 3,
        (StatCategory::Advanced, SeasonType::Regular) => 4,
        (StatCategory::Advanced, SeasonType::Playoffs) => 5,
    }
}

/// Takes the requested table out of the extracted page tables.
///
/// # Errors
/// [`AppError::LayoutMismatch`] when the page has fewer tables than the
/// mapping expects, e.g. playoff stats for a player who never made the playoffs.
pub fn select_table(
    mut tables: Vec<StatsTable>,
    category: StatCategory,
    season_type: SeasonType,
) -> Result<StatsTable, AppError> {
    let index = table_index(category, season_type);
    let available = tables.len();

    if index >= available {
        return Err(AppError::layout_mismatch(index, available));
    }

    Ok(tables.swap_remove(index))
}
