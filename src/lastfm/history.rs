use reqwest::Client;

use crate::{
    config,
    types::{PipelineError, PlayEvent, RecentTracksResponse},
};

/// Retrieves all play events for a user since the given epoch second.
///
/// Pages through `user.getrecenttracks` with the maximum page size of 200
/// until the reported total page count is reached. Entries flagged as
/// currently playing carry no timestamp and are dropped, so the returned
/// sequence contains completed plays only.
///
/// # Arguments
///
/// * `user` - Last.fm user name whose history is fetched
/// * `from` - Lower bound of the window, seconds since epoch
///
/// # Returns
///
/// The play events of the window in the order the service reports them
/// (most recent first). An empty window yields an empty vector.
///
/// # Errors
///
/// Any transport failure or non-success status aborts the fetch. There is no
/// retry; the caller decides what a failed run means.
pub async fn recent_tracks(user: &str, from: u64) -> Result<Vec<PlayEvent>, PipelineError> {
    let client = Client::new();
    let mut events: Vec<PlayEvent> = Vec::new();
    let mut page: u32 = 1;

    loop {
        let api_url = format!(
            "{uri}/?method=user.getrecenttracks&format=json&limit=200",
            uri = config::lastfm_api_url(),
        );

        let response = client
            .get(&api_url)
            .query(&[("user", user)])
            .query(&[("api_key", config::lastfm_api_key())])
            .query(&[("from", from.to_string()), ("page", page.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<RecentTracksResponse>().await?;
        let (mut page_events, has_next_page) = collect_page(body);
        events.append(&mut page_events);

        if !has_next_page {
            break;
        }
        page += 1;
    }

    Ok(events)
}

/// Converts one recent tracks page into play events.
///
/// Returns the events of the page together with whether the service reports
/// further pages, which drives the pagination loop in [`recent_tracks`].
/// Kept free of I/O so the conversion can be exercised against captured
/// payloads.
pub fn collect_page(response: RecentTracksResponse) -> (Vec<PlayEvent>, bool) {
    let current_page = response
        .recenttracks
        .attr
        .page
        .parse::<u32>()
        .unwrap_or(1);
    let total_pages = response
        .recenttracks
        .attr
        .total_pages
        .parse::<u32>()
        .unwrap_or(1);

    let events = response
        .recenttracks
        .track
        .into_iter()
        .filter(|t| {
            // the nowplaying pseudo-entry is not a completed play
            t.attr
                .as_ref()
                .and_then(|a| a.nowplaying.as_deref())
                != Some("true")
        })
        .filter_map(|t| {
            let timestamp = t.date.as_ref()?.uts.parse().ok()?;
            Some(PlayEvent {
                timestamp,
                track: t.name,
                artist: t.artist.text,
                album: t.album.text,
                url: t.url,
            })
        })
        .collect();

    (events, current_page < total_pages)
}
