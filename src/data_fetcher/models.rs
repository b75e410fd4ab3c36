//! Stats table, cell and request types shared by the fetch pipeline and the renderer

use std::fmt;

/// A single table cell as read from the player page.
///
/// Numbers keep the text they were parsed from so they display exactly as the
/// page printed them (".488" stays ".488", "27.0" stays "27.0").
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number { value: f64, raw: String },
}

impl Cell {
    /// Builds a cell from raw cell text, trimming whitespace and detecting numbers.
    ///
    /// # Example
    /// ```
    /// use hoopstats::data_fetcher::models::Cell;
    ///
    /// assert_eq!(Cell::parse("  "), Cell::Empty);
    /// assert_eq!(Cell::parse("27.1").as_number(), Some(27.1));
    /// assert_eq!(Cell::parse("2003-04"), Cell::Text("2003-04".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Cell::Empty;
        }

        // Only plain decimal notation counts; f64::from_str would also take "inf" or "NaN"
        let numeric_chars = text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+');
        if numeric_chars && text.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(value) = text.parse::<f64>() {
                return Cell::Number {
                    value,
                    raw: text.to_string(),
                };
            }
        }

        Cell::Text(text.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric value, if the cell holds a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Text content, if the cell holds text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::parse(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) | Cell::Number { raw: text, .. } => f.write_str(text),
        }
    }
}

/// One statistics table: ordered column names plus rows aligned to them.
///
/// Every row holds exactly `columns().len()` cells; [`StatsTable::new`] pads
/// short rows with [`Cell::Empty`] and truncates long ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl StatsTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell at `row` in the named column
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(index))
    }

    /// Keeps only rows for which `keep` returns true
    pub fn retain_rows<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let rows = self.rows.into_iter().filter(|row| keep(row)).collect();
        Self {
            columns: self.columns,
            rows,
        }
    }

    /// Keeps only columns for which `keep` returns true, preserving their order
    pub fn retain_columns<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let kept: Vec<bool> = self.columns.iter().map(|name| keep(name)).collect();

        let columns = self
            .columns
            .into_iter()
            .zip(&kept)
            .filter_map(|(name, keep)| keep.then_some(name))
            .collect();

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&kept)
                    .filter_map(|(cell, keep)| keep.then_some(cell))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

/// Which stats table variant is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Averages,
    Totals,
    Advanced,
}

impl StatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Averages => "averages",
            StatCategory::Totals => "totals",
            StatCategory::Advanced => "advanced",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonType {
    #[default]
    Regular,
    Playoffs,
}

impl SeasonType {
    pub fn from_playoffs(playoffs: bool) -> Self {
        if playoffs {
            SeasonType::Playoffs
        } else {
            SeasonType::Regular
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player as identified on the stats site: name plus a manual
/// disambiguation index for players whose names share a URL prefix.
///
/// Nothing checks that the index points at the intended player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub first_name: String,
    pub last_name: String,
    pub index: u32,
}

impl PlayerRef {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, index: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            index: index.max(1),
        }
    }

    /// Display name with each part capitalized, e.g. "Lebron James"
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            capitalize(&self.first_name),
            capitalize(&self.last_name)
        )
    }
}

/// Uppercases the first character and lowercases the rest
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
