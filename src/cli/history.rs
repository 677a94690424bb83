use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, error, lastfm, selection, types::TallyTableRow, utils, warning};

pub async fn history(top: Option<usize>) {
    let user = config::lastfm_user();
    let from = utils::lookback_start(Utc::now());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching play history...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let events = match lastfm::recent_tracks(&user, from).await {
        Ok(events) => {
            pb.finish_and_clear();
            events
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch play history: {}", e);
        }
    };

    if events.is_empty() {
        warning!("No plays in the last 24 hours.");
        return;
    }

    let candidates = selection::rank(&events);
    let table_rows: Vec<TallyTableRow> = candidates
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|c| TallyTableRow {
            plays: c.play_count,
            track: c.track,
            artist: c.artist,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
