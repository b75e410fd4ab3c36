use crate::constants::table::{PLACEHOLDER_COLUMN_PREFIX, REDUNDANT_COLUMNS};
use crate::data_fetcher::models::StatsTable;
use tracing::debug;

/// Removes redundant and unlabeled columns.
///
/// Made-shot counts, defensive rebounds and the league column are dropped to
/// fit the table in a terminal; attempts and percentages stay. Columns the
/// extractor named `Unnamed: N` are dropped too. Missing columns are ignored
/// and the remaining columns keep their order.
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::models::StatsTable;
/// use hoopstats::data_fetcher::processors::filter_columns;
///
/// let columns = ["Season", "Lg", "FG", "FGA", "2P", "2PA", "Unnamed: 12"]
///     .iter()
///     .map(|c| c.to_string())
///     .collect();
/// let table = filter_columns(StatsTable::new(columns, vec![]));
/// assert_eq!(table.columns(), &["Season", "FGA", "2PA"]);
/// ```
pub fn filter_columns(table: StatsTable) -> StatsTable {
    let before = table.columns().len();

    let table = table.retain_columns(|name| !is_dropped_column(name));

    debug!(
        "Column filter kept {} of {} columns",
        table.columns().len(),
        before
    );
    table
}

fn is_dropped_column(name: &str) -> bool {
    REDUNDANT_COLUMNS.contains(&name) || name.starts_with(PLACEHOLDER_COLUMN_PREFIX)
}
