// src/main.rs
use clap::Parser;
use hoopstats::cli::Args;
use hoopstats::data_fetcher::api::create_http_client_with_timeout;
use hoopstats::logging;
use hoopstats::{AppError, Config, PlayerRef, StatsPage, fetch_player_stats};
use std::io::stdout;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let player = args.player();
    let category = args.category();
    let season_type = args.season_type();

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let table = match fetch_player_stats(&client, &config, &player, category, season_type).await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                status = ?e.status_code(),
                "Failed to load stats for {}: {e}",
                player.display_name()
            );
            if let Some(hint) = failure_hint(&e, &player) {
                eprintln!("{hint}");
            }
            return Err(e);
        }
    };

    let page = StatsPage::new(table, &player, category, season_type).with_colors(!args.plain);
    page.render_buffered(&mut stdout())?;

    Ok(())
}

/// Suggestion shown when the page or table for a player does not exist
fn failure_hint(error: &AppError, player: &PlayerRef) -> Option<String> {
    if !error.is_not_found() {
        return None;
    }

    match error {
        AppError::LayoutMismatch { .. } => Some(format!(
            "{} has no such table. Players without playoff games have no playoff tables.",
            player.display_name()
        )),
        _ => Some(format!(
            "No page found for {}. Check the spelling, or try another index with -n (currently {}).",
            player.display_name(),
            player.index
        )),
    }
}
