use dailyspin::lastfm::collect_page;
use dailyspin::types::RecentTracksResponse;
use serde_json::json;

fn response_from(value: serde_json::Value) -> RecentTracksResponse {
    serde_json::from_value(value).expect("fixture should deserialize")
}

#[test]
fn test_collect_page_parses_plays() {
    let response = response_from(json!({
        "recenttracks": {
            "track": [
                {
                    "name": "Song1",
                    "artist": { "#text": "ArtistA" },
                    "album": { "#text": "AlbumA" },
                    "url": "https://www.last.fm/music/ArtistA/_/Song1",
                    "date": { "uts": "1700000100" }
                },
                {
                    "name": "Song2",
                    "artist": { "#text": "ArtistB" },
                    "album": { "#text": "" },
                    "url": "https://www.last.fm/music/ArtistB/_/Song2",
                    "date": { "uts": "1700000000" }
                }
            ],
            "@attr": { "page": "1", "totalPages": "1" }
        }
    }));

    let (events, has_next_page) = collect_page(response);

    assert!(!has_next_page);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].track, "Song1");
    assert_eq!(events[0].artist, "ArtistA");
    assert_eq!(events[0].album, "AlbumA");
    assert_eq!(events[0].timestamp, 1_700_000_100);
    assert_eq!(events[1].album, "");
}

#[test]
fn test_collect_page_drops_nowplaying_entry() {
    let response = response_from(json!({
        "recenttracks": {
            "track": [
                {
                    "name": "Still Spinning",
                    "artist": { "#text": "ArtistA" },
                    "album": { "#text": "AlbumA" },
                    "url": "https://www.last.fm/music/ArtistA/_/Still+Spinning",
                    "date": null,
                    "@attr": { "nowplaying": "true" }
                },
                {
                    "name": "Done Playing",
                    "artist": { "#text": "ArtistA" },
                    "album": { "#text": "AlbumA" },
                    "url": "https://www.last.fm/music/ArtistA/_/Done+Playing",
                    "date": { "uts": "1700000000" }
                }
            ],
            "@attr": { "page": "1", "totalPages": "1" }
        }
    }));

    let (events, _) = collect_page(response);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].track, "Done Playing");
}

#[test]
fn test_collect_page_reports_remaining_pages() {
    let first = response_from(json!({
        "recenttracks": {
            "track": [],
            "@attr": { "page": "1", "totalPages": "3" }
        }
    }));
    let last = response_from(json!({
        "recenttracks": {
            "track": [],
            "@attr": { "page": "3", "totalPages": "3" }
        }
    }));

    let (events, has_next_page) = collect_page(first);
    assert!(events.is_empty());
    assert!(has_next_page);

    let (_, has_next_page) = collect_page(last);
    assert!(!has_next_page);
}

#[test]
fn test_collect_page_skips_entries_without_timestamp() {
    // A missing date block that is not flagged nowplaying is still unusable
    let response = response_from(json!({
        "recenttracks": {
            "track": [
                {
                    "name": "No Date",
                    "artist": { "#text": "ArtistA" },
                    "album": { "#text": "AlbumA" },
                    "url": "https://www.last.fm/music/ArtistA/_/No+Date"
                }
            ],
            "@attr": { "page": "1", "totalPages": "1" }
        }
    }));

    let (events, _) = collect_page(response);

    assert!(events.is_empty());
}
