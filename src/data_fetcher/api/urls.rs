//! URL building utilities for player pages

use crate::constants::player_url::{FIRST_NAME_CHARS, LAST_NAME_CHARS};
use crate::data_fetcher::models::PlayerRef;

/// Builds the overview page URL for a player.
///
/// The page id is the first five characters of the last name, the first two
/// characters of the first name and the disambiguation index padded to two
/// digits. Shorter names are used in full. Names are taken as given, so
/// callers should pass them lowercased.
///
/// # Arguments
/// * `base_url` - The site root, without a trailing slash
/// * `player` - The player to look up
///
/// # Returns
/// * `String` - The complete player page URL
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::api::build_player_url;
/// use hoopstats::data_fetcher::models::PlayerRef;
///
/// let player = PlayerRef::new("lebron", "james", 1);
/// let url = build_player_url("https://www.basketball-reference.com", &player);
/// assert_eq!(url, "https://www.basketball-reference.com/players/j/jamesle01.html");
/// ```
pub fn build_player_url(base_url: &str, player: &PlayerRef) -> String {
    format!(
        "{base_url}/players/{}/{}.html",
        player_directory(&player.last_name),
        build_player_id(player)
    )
}

/// Builds the page id part of the URL, e.g. "jamesle01".
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::api::build_player_id;
/// use hoopstats::data_fetcher::models::PlayerRef;
///
/// assert_eq!(build_player_id(&PlayerRef::new("al", "wu", 1)), "wual01");
/// ```
pub fn build_player_id(player: &PlayerRef) -> String {
    format!(
        "{}{}{:02}",
        take_chars(&player.last_name, LAST_NAME_CHARS),
        take_chars(&player.first_name, FIRST_NAME_CHARS),
        player.index
    )
}

/// Directory segment: the lowercased first character of the last name
fn player_directory(last_name: &str) -> String {
    last_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

fn take_chars(name: &str, count: usize) -> &str {
    match name.char_indices().nth(count) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
