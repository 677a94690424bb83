use std::str::FromStr;

use chrono::Utc;
use cron::Schedule;
use tokio::time::sleep;

use crate::{config, error, info, pipeline, warning};

// sec min hour day month weekday year
const DAILY_CRON: &str = "0 0 0 * * * *";

/// Fires the daily selection at midnight UTC, forever.
///
/// Computes the next fire time from the cron expression, sleeps until then
/// and runs the pipeline. A failed run is logged and the loop keeps going;
/// the next midnight gets a fresh attempt.
pub async fn run_daily_trigger() {
    let schedule = match Schedule::from_str(DAILY_CRON) {
        Ok(s) => s,
        Err(e) => error!("Invalid schedule expression: {}", e),
    };

    loop {
        let now = Utc::now();
        let Some(next) = schedule.after(&now).next() else {
            warning!("No upcoming fire time, daily trigger stopped");
            return;
        };

        let wait = (next - now).to_std().unwrap_or(std::time::Duration::ZERO);
        info!("Next daily run in {}s at {}", wait.as_secs(), next);
        sleep(wait).await;

        if let Err(e) =
            pipeline::run_daily_selection(&config::lastfm_user(), &config::spotify_playlist_id())
                .await
        {
            warning!("Scheduled daily run failed: {}", e);
        }
    }
}
