use crate::{config, error, pipeline};

pub async fn run() {
    let user = config::lastfm_user();
    let playlist_id = config::spotify_playlist_id();

    if let Err(e) = pipeline::run_daily_selection(&user, &playlist_id).await {
        error!("Daily run failed: {}", e);
    }
}
