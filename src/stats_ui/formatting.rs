// src/stats_ui/formatting.rs - Column sizing and box-drawing helpers for StatsPage

use unicode_width::UnicodeWidthStr;

use crate::data_fetcher::models::{Cell, StatsTable};

/// Horizontal placement of text within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    /// Numbers line up on the right, everything else on the left
    pub fn for_cell(cell: &Cell) -> Self {
        match cell {
            Cell::Number { .. } => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// Display width of each column: the widest of its header and cells
pub fn column_widths(table: &StatsTable) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows()
                .iter()
                .map(|row| row[i].to_string().width())
                .max()
                .unwrap_or(0)
                .max(header.width())
        })
        .collect()
}

/// Pads `text` to `width` display columns
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match alignment {
        Alignment::Left => format!("{text}{fill}"),
        Alignment::Right => format!("{fill}{text}"),
    }
}

/// Characters for one horizontal border line
#[derive(Debug, Clone, Copy)]
pub struct BorderChars {
    pub left: char,
    pub fill: char,
    pub join: char,
    pub right: char,
}

pub const TOP_BORDER: BorderChars = BorderChars {
    left: '╔',
    fill: '═',
    join: '╦',
    right: '╗',
};

pub const HEADER_SEPARATOR: BorderChars = BorderChars {
    left: '╠',
    fill: '═',
    join: '╬',
    right: '╣',
};

pub const ROW_SEPARATOR: BorderChars = BorderChars {
    left: '╟',
    fill: '─',
    join: '╫',
    right: '╢',
};

pub const BOTTOM_BORDER: BorderChars = BorderChars {
    left: '╚',
    fill: '═',
    join: '╩',
    right: '╝',
};

/// Builds a border line spanning all columns, one space of padding per side
pub fn border_line(widths: &[usize], chars: BorderChars) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| chars.fill.to_string().repeat(w + 2))
        .collect();
    format!(
        "{}{}{}",
        chars.left,
        segments.join(chars.join.to_string().as_str()),
        chars.right
    )
}

/// Builds a content line: `║ a ║ b ║`
pub fn content_line(texts: &[String], widths: &[usize], alignments: &[Alignment]) -> String {
    let cells: Vec<String> = texts
        .iter()
        .zip(widths)
        .zip(alignments)
        .map(|((text, width), alignment)| format!(" {} ", pad(text, *width, *alignment)))
        .collect();
    format!("║{}║", cells.join("║"))
}

/// Centers `text` within `width` display columns
pub fn center(text: &str, width: usize) -> String {
    let total = width.saturating_sub(text.width());
    let left = total / 2;
    format!("{}{}", " ".repeat(left), text)
}
