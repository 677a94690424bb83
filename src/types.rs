use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One historical playback record from the history service.
///
/// Immutable once fetched. The `url` is the provider link to the track page,
/// carried along for display and debugging only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub timestamp: u64,
    pub track: String,
    pub artist: String,
    pub album: String,
    pub url: String,
}

/// One distinct track name aggregated from play events.
///
/// Artist, album and url come from the first play event encountered for the
/// name, in fetch order. Recomputed on every run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub track: String,
    pub artist: String,
    pub album: String,
    pub url: String,
    pub play_count: u32,
}

#[derive(Tabled)]
pub struct TallyTableRow {
    pub plays: u32,
    pub track: String,
    pub artist: String,
}

/// Final outcome of one daily selection run.
#[derive(Debug, Clone)]
pub enum SelectionOutcome {
    /// The track was resolved, absent from the playlist and appended.
    Added(Track),
    /// Every candidate was either unresolvable or already present. This is a
    /// valid terminal state, not an error.
    NoEligibleCandidate,
}

/// Errors that abort a daily selection run.
///
/// Per-candidate resolution misses are not represented here. They are absorbed
/// inside the selector and only logged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The playlist append was not acknowledged with 201 Created.
    #[error("playlist append rejected with status {0}")]
    Append(StatusCode),

    #[error("token cache unavailable: {0}")]
    Token(String),
}

// ---- Spotify wire types ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

impl Track {
    /// Display name of the primary artist, if the catalog reported any.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    // null for removed or local-only entries
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

// ---- Last.fm wire types ----
//
// The recent tracks payload wraps artist and album names in `#text`
// containers and reports pagination counters as strings.

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracksResponse {
    pub recenttracks: RecentTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracks {
    pub track: Vec<RecentTrack>,
    #[serde(rename = "@attr")]
    pub attr: PaginationAttr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTrack {
    pub name: String,
    pub artist: TextField,
    pub album: TextField,
    pub url: String,
    pub date: Option<PlayDate>,
    #[serde(rename = "@attr")]
    pub attr: Option<RecentTrackAttr>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextField {
    #[serde(rename = "#text")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayDate {
    pub uts: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTrackAttr {
    pub nowplaying: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationAttr {
    pub page: String,
    #[serde(rename = "totalPages")]
    pub total_pages: String,
}
