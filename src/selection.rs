//! Play tally ranking and duplicate-avoiding selection.
//!
//! This is the decision half of the daily run: [`rank`] turns a day of play
//! events into a tally ordered by play count, and [`select`] walks that tally
//! to find the first track that resolves in the streaming catalog and is not
//! already in the target playlist. Everything here is a pure transformation
//! except for the injected [`ResolveTrack`] capability.

use std::collections::HashMap;

use crate::{
    info,
    types::{PipelineError, PlayEvent, RankedCandidate, Track},
    warning,
};

/// Capability to resolve a (track, artist) pair to a concrete catalog track.
///
/// The production implementation performs a Spotify catalog search and keeps
/// the first exact-name match. Returning `Ok(None)` means the search completed
/// but found nothing usable, which the selector treats as a skippable miss.
/// A transport error aborts the whole run.
pub trait ResolveTrack {
    async fn resolve(
        &mut self,
        track: &str,
        artist: &str,
    ) -> Result<Option<Track>, PipelineError>;
}

/// The current track listing of the target playlist at selection time.
///
/// Only supports membership testing by track name. Matching on names rather
/// than catalog IDs can false-positive on covers and remixes sharing a title.
#[derive(Debug, Clone, Default)]
pub struct PlaylistSnapshot {
    names: Vec<String>,
}

impl PlaylistSnapshot {
    pub fn new(names: Vec<String>) -> Self {
        PlaylistSnapshot { names }
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Result of walking the ranked candidates against the playlist.
#[derive(Debug)]
pub enum SelectionResult {
    Selected(Track),
    NoEligibleCandidate,
}

/// Aggregates play events into a ranked tally of distinct track names.
///
/// Events are grouped by exact, case-sensitive track name. Each group keeps
/// the artist, album and url of its first event in input order, so the
/// representative metadata is deterministic for identical input. The tally is
/// sorted by play count descending with a stable sort, which leaves ties in
/// first-encounter order.
///
/// # Arguments
///
/// * `events` - Any finite sequence of play events, possibly empty
///
/// # Returns
///
/// The ranked tally. Empty input produces an empty tally.
pub fn rank(events: &[PlayEvent]) -> Vec<RankedCandidate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<RankedCandidate> = Vec::new();

    for event in events {
        match index.get(event.track.as_str()) {
            Some(&at) => candidates[at].play_count += 1,
            None => {
                index.insert(event.track.as_str(), candidates.len());
                candidates.push(RankedCandidate {
                    track: event.track.clone(),
                    artist: event.artist.clone(),
                    album: event.album.clone(),
                    url: event.url.clone(),
                    play_count: 1,
                });
            }
        }
    }

    // stable, so equal counts keep first-encounter order
    candidates.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    candidates
}

/// Picks the first ranked candidate that resolves in the catalog and is not
/// already in the playlist.
///
/// Candidates are attempted in rank order, highest play count first. Two
/// conditions skip a candidate without failing the run: the catalog search
/// yields no exact-name match, or the playlist already contains a track of
/// the resolved name. The walk stops at the first candidate that survives
/// both checks. Exhausting the tally is a valid terminal state and returns
/// [`SelectionResult::NoEligibleCandidate`].
///
/// # Arguments
///
/// * `candidates` - The ranked tally produced by [`rank`]
/// * `resolver` - Catalog search capability
/// * `playlist` - Current playlist listing for the name-based membership test
///
/// # Errors
///
/// Only a transport failure inside the resolver surfaces as an error. No
/// retry is attempted; a failed search aborts the run.
pub async fn select<R: ResolveTrack>(
    candidates: &[RankedCandidate],
    resolver: &mut R,
    playlist: &PlaylistSnapshot,
) -> Result<SelectionResult, PipelineError> {
    for candidate in candidates {
        info!(
            "Searching for {} by {} ({} plays)",
            candidate.track, candidate.artist, candidate.play_count
        );

        let Some(track) = resolver.resolve(&candidate.track, &candidate.artist).await? else {
            warning!("{} not found in the catalog, skipping", candidate.track);
            continue;
        };

        if playlist.contains_name(&track.name) {
            info!("{} is already in the playlist, skipping", track.name);
            continue;
        }

        return Ok(SelectionResult::Selected(track));
    }

    Ok(SelectionResult::NoEligibleCandidate)
}
