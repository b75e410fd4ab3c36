//! HTML table extraction
//!
//! Turns every `<table>` on a player page into a [`StatsTable`], in document
//! order. The table selector indexes into this list by position, so order
//! must match the page source.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::constants::table::PLACEHOLDER_COLUMN_PREFIX;
use crate::data_fetcher::models::{Cell, StatsTable};
use crate::error::AppError;

/// Class marking a grouping row above the real header row
const OVER_HEADER_CLASS: &str = "over_header";

/// Class marking a header row repeated inside the table body
const REPEATED_HEADER_CLASS: &str = "thead";

struct TableSelectors {
    table: Selector,
    header_rows: Selector,
    body_rows: Selector,
    footer_rows: Selector,
    any_row: Selector,
    cells: Selector,
}

impl TableSelectors {
    fn new() -> Result<Self, AppError> {
        Ok(Self {
            table: parse_selector("table")?,
            header_rows: parse_selector("thead > tr")?,
            body_rows: parse_selector("tbody > tr")?,
            footer_rows: parse_selector("tfoot > tr")?,
            any_row: parse_selector("tr")?,
            cells: parse_selector("th, td")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, AppError> {
    Selector::parse(selector)
        .map_err(|e| AppError::html_parse_error(format!("invalid CSS selector '{selector}': {e}")))
}

/// Parses all tables in an HTML document.
///
/// Tables inside HTML comments are not part of the document tree and are
/// therefore not returned.
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::table_extractor::extract_tables;
///
/// let html = "<table><thead><tr><th>Season</th><th>PTS</th></tr></thead>\
///             <tbody><tr><th>2003-04</th><td>20.9</td></tr></tbody></table>";
/// let tables = extract_tables(html).unwrap();
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].columns(), &["Season".to_string(), "PTS".to_string()]);
/// ```
pub fn extract_tables(html: &str) -> Result<Vec<StatsTable>, AppError> {
    let selectors = TableSelectors::new()?;
    let document = Html::parse_document(html);

    let tables: Vec<StatsTable> = document
        .select(&selectors.table)
        .map(|table| extract_table(table, &selectors))
        .collect();

    debug!("Extracted {} tables from page", tables.len());
    Ok(tables)
}

fn extract_table(table: ElementRef<'_>, selectors: &TableSelectors) -> StatsTable {
    let header_row = table
        .select(&selectors.header_rows)
        .filter(|row| !has_class(row, OVER_HEADER_CLASS))
        .last();

    let mut body_rows: Vec<ElementRef<'_>> = table
        .select(&selectors.body_rows)
        .chain(table.select(&selectors.footer_rows))
        .filter(|row| !has_class(row, REPEATED_HEADER_CLASS))
        .collect();

    // Tables without a <thead> carry their header in the first row
    let header_row = match header_row {
        Some(row) => Some(row),
        None if !body_rows.is_empty() => Some(body_rows.remove(0)),
        None => table.select(&selectors.any_row).next(),
    };

    let header_texts = header_row
        .map(|row| row_texts(row, selectors))
        .unwrap_or_default();
    let columns = column_names(header_texts);

    let rows = body_rows
        .into_iter()
        .map(|row| {
            row_texts(row, selectors)
                .iter()
                .map(|text| Cell::parse(text))
                .collect()
        })
        .collect();

    StatsTable::new(columns, rows)
}

/// Cell texts of one row, with a `colspan="n"` cell repeated `n` times so
/// later cells stay under their own headers.
fn row_texts(row: ElementRef<'_>, selectors: &TableSelectors) -> Vec<String> {
    row.select(&selectors.cells)
        .flat_map(|cell| {
            let text = cell.text().collect::<String>().trim().to_string();
            std::iter::repeat_n(text, column_span(&cell))
        })
        .collect()
}

fn column_span(cell: &ElementRef<'_>) -> usize {
    cell.value()
        .attr("colspan")
        .and_then(|span| span.trim().parse::<usize>().ok())
        .filter(|span| *span > 0)
        .unwrap_or(1)
}

fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Fills in unlabeled headers and makes duplicate names unique.
///
/// An empty header at position `i` becomes `Unnamed: i`; a repeated name
/// gets `.1`, `.2`, ... appended in order of appearance.
fn column_names(headers: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());

    for (i, header) in headers.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("{PLACEHOLDER_COLUMN_PREFIX} {i}")
        } else {
            header
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER_PAGE: &str = r#"
        <html><body>
        <table id="per_game">
          <thead>
            <tr><th>Season</th><th>Age</th><th>Lg</th><th>PTS</th><th></th></tr>
          </thead>
          <tbody>
            <tr><th>2003-04</th><td>19</td><td>NBA</td><td>20.9</td><td></td></tr>
            <tr class="thead"><th>Season</th><th>Age</th><th>Lg</th><th>PTS</th><th></th></tr>
            <tr><th>2004-05</th><td>20</td><td>NBA</td><td>27.2</td><td></td></tr>
          </tbody>
          <tfoot>
            <tr><th>Career</th><td></td><td>NBA</td><td>27.1</td><td></td></tr>
          </tfoot>
        </table>
        <!-- <table id="hidden"><tr><td>x</td></tr></table> -->
        <table id="advanced">
          <thead>
            <tr class="over_header"><th colspan="2"></th><th colspan="2">Shooting</th></tr>
            <tr><th>Season</th><th>G</th><th>TS%</th><th>G</th></tr>
          </thead>
          <tbody>
            <tr><th>2003-04</th><td>79</td><td>.488</td><td>1</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_tables_in_document_order() {
        let tables = extract_tables(PLAYER_PAGE).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns()[0], "Season");
        assert_eq!(tables[1].columns()[2], "TS%");
    }

    #[test]
    fn test_repeated_header_rows_skipped_and_footer_included() {
        let tables = extract_tables(PLAYER_PAGE).unwrap();
        let per_game = &tables[0];

        assert_eq!(per_game.row_count(), 3);
        assert_eq!(
            per_game.cell(1, "Season"),
            Some(&Cell::Text("2004-05".to_string()))
        );
        assert_eq!(
            per_game.cell(2, "Season"),
            Some(&Cell::Text("Career".to_string()))
        );
        assert_eq!(per_game.cell(2, "Age"), Some(&Cell::Empty));
        assert_eq!(
            per_game.cell(2, "PTS").and_then(Cell::as_number),
            Some(27.1)
        );
    }

    #[test]
    fn test_unlabeled_column_gets_placeholder_name() {
        let tables = extract_tables(PLAYER_PAGE).unwrap();
        assert_eq!(tables[0].columns()[4], "Unnamed: 4");
    }

    #[test]
    fn test_over_header_ignored_and_duplicates_renamed() {
        let tables = extract_tables(PLAYER_PAGE).unwrap();
        let advanced = &tables[1];

        assert_eq!(
            advanced.columns(),
            &[
                "Season".to_string(),
                "G".to_string(),
                "TS%".to_string(),
                "G.1".to_string()
            ]
        );
        assert_eq!(
            advanced.cell(0, "TS%").and_then(Cell::as_number),
            Some(0.488)
        );
    }

    #[test]
    fn test_table_without_thead_uses_first_row_as_header() {
        let html = "<table><tr><th>Season</th><th>Lg</th></tr>\
                    <tr><td>2019-20</td><td>NBA</td></tr></table>";
        let tables = extract_tables(html).unwrap();

        assert_eq!(tables[0].columns(), &["Season".to_string(), "Lg".to_string()]);
        assert_eq!(tables[0].row_count(), 1);
    }

    #[test]
    fn test_colspan_cell_fills_spanned_columns() {
        let html = r#"<table>
            <thead><tr><th>Season</th><th>Lg</th><th>G</th><th>MP</th><th>PTS</th></tr></thead>
            <tbody>
              <tr><th>2019-20</th><td colspan="3">Did Not Play</td><td>7.5</td></tr>
              <tr><th>2020-21</th><td colspan="bogus">NBA</td><td>60</td><td>31.2</td><td>18.0</td></tr>
            </tbody>
           </table>"#;

        let tables = extract_tables(html).unwrap();
        let table = &tables[0];

        assert_eq!(table.rows()[0].len(), 5);
        assert_eq!(
            table.cell(0, "MP"),
            Some(&Cell::Text("Did Not Play".to_string()))
        );
        assert_eq!(table.cell(0, "PTS").and_then(Cell::as_number), Some(7.5));
        assert_eq!(table.cell(1, "Lg"), Some(&Cell::Text("NBA".to_string())));
        assert_eq!(table.cell(1, "PTS").map(|c| c.to_string()), Some("18.0".to_string()));
    }

    #[test]
    fn test_page_without_tables() {
        let tables = extract_tables("<html><body><p>Page not found</p></body></html>").unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_column_names() {
        let names = column_names(vec![
            "Season".to_string(),
            String::new(),
            "G".to_string(),
            "G".to_string(),
            "G".to_string(),
        ]);
        assert_eq!(names, vec!["Season", "Unnamed: 1", "G", "G.1", "G.2"]);
    }
}
