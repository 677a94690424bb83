use axum::response::Json;
use serde_json::{Value, json};

use crate::{config, pipeline, types::SelectionOutcome, warning};

/// Runs one daily selection and reports the outcome.
///
/// A run that ends with every candidate already present answers with
/// `success: false` but status 200; that is a normal terminal state of the
/// reconciliation, not a server fault. Only transport and mutation errors
/// surface in the `error` field.
pub async fn daily() -> Json<Value> {
    let user = config::lastfm_user();
    let playlist_id = config::spotify_playlist_id();

    match pipeline::run_daily_selection(&user, &playlist_id).await {
        Ok(SelectionOutcome::Added(track)) => {
            let artist = track.primary_artist().to_string();
            Json(json!({
                "success": true,
                "added": track.name,
                "artist": artist,
                "uri": track.uri,
            }))
        }
        Ok(SelectionOutcome::NoEligibleCandidate) => Json(json!({
            "success": false,
            "message": "All songs are already in the playlist",
        })),
        Err(e) => {
            warning!("Daily run failed: {}", e);
            Json(json!({ "error": e.to_string() }))
        }
    }
}
