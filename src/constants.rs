//! Application-wide constants and configuration values
//!
//! Source-site layout details live here so a change on the page side
//! touches one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Site serving the player overview pages
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// File name used for the rolling log file
pub const LOG_FILE_NAME: &str = "hoopstats.log";

/// Player page URL layout
pub mod player_url {
    /// Characters taken from the start of the last name
    pub const LAST_NAME_CHARS: usize = 5;

    /// Characters taken from the start of the first name
    pub const FIRST_NAME_CHARS: usize = 2;

    /// Default disambiguation index for players sharing a name prefix
    pub const DEFAULT_INDEX: u32 = 1;
}

/// Column and row labels used by the stats tables
pub mod table {
    /// League value kept by the row filter
    pub const NBA_LEAGUE: &str = "NBA";

    /// League column header on the page, plus its long-form alias
    pub const LEAGUE_COLUMNS: [&str; 2] = ["Lg", "League"];

    /// Season column header
    pub const SEASON_COLUMN: &str = "Season";

    /// Markers found in the season cell of team summary rows ("3 seasons", "2-team totals")
    pub const TEAM_SUMMARY_MARKERS: [&str; 2] = ["season", "team totals"];

    /// First cell of the career aggregate row
    pub const CAREER_ROW_LABEL: &str = "Career";

    /// Prefix given to columns whose header has no label
    pub const PLACEHOLDER_COLUMN_PREFIX: &str = "Unnamed:";

    /// Made-shot counts, defensive rebounds and league, dropped to fit terminal width
    pub const REDUNDANT_COLUMNS: [&str; 7] = ["2P", "3P", "DRB", "FG", "FT", "Lg", "League"];
}

/// Terminal colors used by the stats table renderer
pub mod colors {
    /// Title text (bright green)
    pub const TITLE_FG: u8 = 46;

    /// Header row and borders (bright blue)
    pub const HEADER_FG: u8 = 21;

    /// Even-indexed data rows (bright cyan)
    pub const EVEN_ROW_FG: u8 = 51;

    /// Odd-indexed data rows (pure white)
    pub const ODD_ROW_FG: u8 = 231;

    /// Career aggregate row (bright yellow)
    pub const CAREER_ROW_FG: u8 = 226;
}
