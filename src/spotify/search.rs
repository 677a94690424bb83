use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    selection::ResolveTrack,
    types::{PipelineError, SearchTracksResponse, Track},
    warning,
};

/// Searches the Spotify catalog for a track by name and artist.
///
/// Issues a single `/search` query of the form `track:{name} artist:{artist}`
/// and returns the first result whose name equals the requested name exactly.
/// A search that completes but has no exact-name hit returns `Ok(None)`;
/// close matches and remasters with differing titles do not count.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `track` - Track title as reported by the history service
/// * `artist` - Artist name used to narrow the search
///
/// # Rate Limiting
///
/// A 429 Too Many Requests answer is retried after waiting out the
/// `Retry-After` header, as long as the requested delay stays within 120
/// seconds. Longer delays get a warning and propagate as an error status.
pub async fn search_track(
    token: &str,
    track: &str,
    artist: &str,
) -> Result<Option<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let query = format!("track:{track} artist:{artist}");

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "20")])
            .bearer_auth(token)
            .send()
            .await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try your best tomorrow again.",
                    retry_after
                );
            }
        }

        let response = response.error_for_status()?;
        let json = response.json::<SearchTracksResponse>().await?;

        return Ok(json.tracks.items.into_iter().find(|t| t.name == track));
    }
}

/// Production resolve capability backed by the catalog search.
///
/// Owns the token manager so every search runs with a valid access token,
/// refreshing and re-persisting it when the expiry window is near.
pub struct CatalogResolver {
    tokens: TokenManager,
}

impl CatalogResolver {
    pub fn new(tokens: TokenManager) -> Self {
        CatalogResolver { tokens }
    }

    /// Hands the token manager back, e.g. for the playlist append that
    /// follows a successful selection.
    pub fn into_inner(self) -> TokenManager {
        self.tokens
    }
}

impl ResolveTrack for CatalogResolver {
    async fn resolve(
        &mut self,
        track: &str,
        artist: &str,
    ) -> Result<Option<Track>, PipelineError> {
        let token = self.tokens.get_valid_token().await;
        Ok(search_track(&token, track, artist).await?)
    }
}
