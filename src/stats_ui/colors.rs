use crossterm::style::Color;

use crate::constants::colors::{
    CAREER_ROW_FG, EVEN_ROW_FG, HEADER_FG, ODD_ROW_FG, TITLE_FG,
};

pub fn title_fg() -> Color {
    Color::AnsiValue(TITLE_FG)
} // Bright green
pub fn header_fg() -> Color {
    Color::AnsiValue(HEADER_FG)
} // Bright blue
pub fn even_row_fg() -> Color {
    Color::AnsiValue(EVEN_ROW_FG)
} // Bright cyan
pub fn odd_row_fg() -> Color {
    Color::AnsiValue(ODD_ROW_FG)
} // Pure white
pub fn career_row_fg() -> Color {
    Color::AnsiValue(CAREER_ROW_FG)
} // Bright yellow
