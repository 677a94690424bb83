use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    selection::PlaylistSnapshot,
    types::{AddTracksRequest, AddTracksResponse, PipelineError, PlaylistTracksResponse, Track},
};

/// Retrieves the full track listing of a playlist as a snapshot.
///
/// Follows the `next` page URL until the listing is exhausted, so playlists
/// longer than one page are covered completely. Entries whose track is null
/// (removed or local-only items) are dropped. Only the track names survive
/// into the snapshot; the membership test downstream is name-based.
///
/// # Retry Logic
///
/// 502 Bad Gateway answers are retried after a 10 second pause. Other errors
/// are propagated immediately.
pub async fn get_tracks(
    playlist_id: &str,
    token: &str,
) -> Result<PlaylistSnapshot, PipelineError> {
    let mut names: Vec<String> = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?fields=items(track(name,uri)),next&limit=100",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    ));

    while let Some(url) = next_url.take() {
        let client = Client::new();
        let response = client.get(&url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            next_url = Some(url);
                            continue; // retry
                        }
                    }
                    return Err(err.into()); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err.into());
            } // network or reqwest error
        };

        let page = response.json::<PlaylistTracksResponse>().await?;
        names.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track)
                .map(|t| t.name),
        );
        next_url = page.next;
    }

    Ok(PlaylistSnapshot::new(names))
}

/// Appends a single track to the playlist.
///
/// Anything other than 201 Created is treated as a failed mutation and
/// surfaces as [`PipelineError::Append`], aborting the run. The snapshot id
/// in the response body is parsed and discarded.
pub async fn add_track(
    playlist_id: &str,
    track: &Track,
    token: &str,
) -> Result<(), PipelineError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTracksRequest {
        uris: vec![track.uri.clone()],
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    if response.status() != StatusCode::CREATED {
        return Err(PipelineError::Append(response.status()));
    }

    let _ = response.json::<AddTracksResponse>().await?;
    Ok(())
}
