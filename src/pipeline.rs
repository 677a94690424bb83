//! The daily selection run, from history fetch to playlist append.
//!
//! One invocation per trigger, no overlapping runs assumed. Per-candidate
//! misses stay inside the selector; only transport failures and a rejected
//! append abort the run.

use chrono::Utc;

use crate::{
    info, lastfm,
    management::TokenManager,
    selection::{self, SelectionResult},
    spotify::{playlist, search::CatalogResolver},
    success,
    types::{PipelineError, SelectionOutcome},
    utils,
};

/// Reconciles the user's trailing 24 hours of plays against the playlist.
///
/// Steps, in order: load the persisted token pair, fetch the play history
/// window, rank it into a tally, read the current playlist listing, walk the
/// tally for the first resolvable track not yet present, and append it.
///
/// # Returns
///
/// [`SelectionOutcome::Added`] with the appended track, or
/// [`SelectionOutcome::NoEligibleCandidate`] when the tally is empty or every
/// candidate is unresolvable or already present.
///
/// # Errors
///
/// A missing token cache, a failed external call, or an append that is not
/// acknowledged with 201 Created abort the run.
pub async fn run_daily_selection(
    user: &str,
    playlist_id: &str,
) -> Result<SelectionOutcome, PipelineError> {
    let mut token_mgr = TokenManager::load().await.map_err(PipelineError::Token)?;

    let from = utils::lookback_start(Utc::now());

    info!("Fetching play history for {}", user);
    let events = lastfm::recent_tracks(user, from).await?;
    info!("Got {} plays in the last 24 hours", events.len());

    let candidates = selection::rank(&events);
    if let Some(top) = candidates.first() {
        info!(
            "Most listened: {} by {} with {} plays",
            top.track, top.artist, top.play_count
        );
    }

    let token = token_mgr.get_valid_token().await;
    let snapshot = playlist::get_tracks(playlist_id, &token).await?;
    info!("Playlist currently holds {} tracks", snapshot.len());

    let mut resolver = CatalogResolver::new(token_mgr);
    match selection::select(&candidates, &mut resolver, &snapshot).await? {
        SelectionResult::Selected(track) => {
            let mut token_mgr = resolver.into_inner();
            let token = token_mgr.get_valid_token().await;
            playlist::add_track(playlist_id, &track, &token).await?;
            success!(
                "Added {} by {} to the playlist",
                track.name,
                track.primary_artist()
            );
            Ok(SelectionOutcome::Added(track))
        }
        SelectionResult::NoEligibleCandidate => {
            info!("No eligible candidate, playlist left unchanged");
            Ok(SelectionOutcome::NoEligibleCandidate)
        }
    }
}
