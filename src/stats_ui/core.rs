// src/stats_ui/core.rs - StatsPage: a titled, banded stats table for the terminal

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use super::colors::{career_row_fg, even_row_fg, header_fg, odd_row_fg, title_fg};
use super::formatting::{
    Alignment, BOTTOM_BORDER, HEADER_SEPARATOR, ROW_SEPARATOR, TOP_BORDER, border_line, center,
    column_widths, content_line,
};
use crate::constants::table::CAREER_ROW_LABEL;
use crate::data_fetcher::models::{Cell, PlayerRef, SeasonType, StatCategory, StatsTable};
use crate::error::AppError;

/// Visual band a data row is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Even row position
    Even,
    /// Odd row position
    Odd,
    /// The career aggregate row, whatever its position
    Career,
}

impl RowStyle {
    pub fn color(&self) -> Color {
        match self {
            RowStyle::Even => even_row_fg(),
            RowStyle::Odd => odd_row_fg(),
            RowStyle::Career => career_row_fg(),
        }
    }
}

/// Band for the row at `index`: the career row stands out, the rest alternate.
pub fn row_style(index: usize, row: &[Cell]) -> RowStyle {
    if row.first().and_then(Cell::as_text) == Some(CAREER_ROW_LABEL) {
        RowStyle::Career
    } else if index % 2 == 0 {
        RowStyle::Even
    } else {
        RowStyle::Odd
    }
}

/// A cleaned stats table plus the title it is shown under.
#[derive(Debug, Clone)]
pub struct StatsPage {
    title: String,
    table: StatsTable,
    use_colors: bool,
}

impl StatsPage {
    /// Creates a page titled e.g. "Lebron James Regular Season averages".
    pub fn new(
        table: StatsTable,
        player: &PlayerRef,
        category: StatCategory,
        season_type: SeasonType,
    ) -> Self {
        let title = format!("{} {} {}", player.display_name(), season_type, category);
        Self {
            title,
            table,
            use_colors: true,
        }
    }

    /// Turns ANSI colors on or off; box drawing is kept either way.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn table(&self) -> &StatsTable {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Band of every data row, in display order
    pub fn row_styles(&self) -> Vec<RowStyle> {
        self.table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| row_style(i, row))
            .collect()
    }

    /// Writes the whole page to `out` and flushes it.
    ///
    /// Layout: centered title, boxed header, then one line per row with a
    /// thin separator between rows. A table without rows renders as header
    /// and borders only.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let widths = column_widths(&self.table);
        let top = border_line(&widths, TOP_BORDER);
        let table_width = top.chars().count();

        self.write_line(out, &center(&self.title, table_width), Some(title_fg()), true)?;
        self.write_line(out, &top, Some(header_fg()), false)?;

        let header_alignments = vec![Alignment::Left; widths.len()];
        let header = content_line(self.table.columns(), &widths, &header_alignments);
        self.write_line(out, &header, Some(header_fg()), true)?;
        self.write_line(
            out,
            &border_line(&widths, HEADER_SEPARATOR),
            Some(header_fg()),
            false,
        )?;

        let row_separator = border_line(&widths, ROW_SEPARATOR);
        for (i, row) in self.table.rows().iter().enumerate() {
            if i > 0 {
                self.write_line(out, &row_separator, Some(header_fg()), false)?;
            }

            let texts: Vec<String> = row.iter().map(Cell::to_string).collect();
            let alignments: Vec<Alignment> = row.iter().map(Alignment::for_cell).collect();
            let style = row_style(i, row);
            self.write_line(
                out,
                &content_line(&texts, &widths, &alignments),
                Some(style.color()),
                style == RowStyle::Career,
            )?;
        }

        self.write_line(out, &border_line(&widths, BOTTOM_BORDER), Some(header_fg()), false)?;
        out.flush()?;
        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        out: &mut W,
        text: &str,
        color: Option<Color>,
        bold: bool,
    ) -> Result<(), AppError> {
        if !self.use_colors {
            queue!(out, Print(text), Print("\n"))?;
            return Ok(());
        }

        if let Some(color) = color {
            queue!(out, SetForegroundColor(color))?;
        }
        if bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }
}
