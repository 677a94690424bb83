use std::collections::HashMap;

use dailyspin::selection::{PlaylistSnapshot, ResolveTrack, SelectionResult, rank, select};
use dailyspin::types::{PipelineError, PlayEvent, Track, TrackArtist};

// Helper function to create a test play event
fn play(track: &str, artist: &str) -> PlayEvent {
    PlayEvent {
        timestamp: 1_700_000_000,
        track: track.to_string(),
        artist: artist.to_string(),
        album: format!("{} Album", artist),
        url: format!("https://www.last.fm/music/{}/_/{}", artist, track),
    }
}

// Helper function to create a catalog track for the mock resolver
fn catalog_track(name: &str, artist: &str) -> Track {
    Track {
        id: format!("{}_id", name),
        name: name.to_string(),
        uri: format!("spotify:track:{}_id", name),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", artist),
            name: artist.to_string(),
        }],
    }
}

// Resolver over a fixed catalog that records every lookup it serves
struct MockResolver {
    catalog: HashMap<String, Track>,
    calls: Vec<String>,
}

impl MockResolver {
    fn new(tracks: Vec<Track>) -> Self {
        MockResolver {
            catalog: tracks.into_iter().map(|t| (t.name.clone(), t)).collect(),
            calls: Vec::new(),
        }
    }

    fn empty() -> Self {
        MockResolver::new(Vec::new())
    }
}

impl ResolveTrack for MockResolver {
    async fn resolve(
        &mut self,
        track: &str,
        _artist: &str,
    ) -> Result<Option<Track>, PipelineError> {
        self.calls.push(track.to_string());
        Ok(self.catalog.get(track).cloned())
    }
}

#[test]
fn test_rank_counts_repeat_plays() {
    let events = vec![
        play("Song1", "ArtistA"),
        play("Song1", "ArtistA"),
        play("Song2", "ArtistB"),
    ];

    let ranked = rank(&events);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].track, "Song1");
    assert_eq!(ranked[0].play_count, 2);
    assert_eq!(ranked[1].track, "Song2");
    assert_eq!(ranked[1].play_count, 1);
}

#[test]
fn test_rank_preserves_total_play_count() {
    let events = vec![
        play("A", "X"),
        play("B", "X"),
        play("A", "X"),
        play("C", "Y"),
        play("B", "X"),
        play("A", "X"),
    ];

    let ranked = rank(&events);

    // Every play is accounted for exactly once
    let total: u32 = ranked.iter().map(|c| c.play_count).sum();
    assert_eq!(total as usize, events.len());

    // One candidate per distinct name
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_rank_sorts_by_play_count_descending() {
    let events = vec![
        play("A", "X"),
        play("B", "X"),
        play("B", "X"),
        play("C", "Y"),
        play("C", "Y"),
        play("C", "Y"),
    ];

    let ranked = rank(&events);

    for pair in ranked.windows(2) {
        assert!(pair[0].play_count >= pair[1].play_count);
    }
    assert_eq!(ranked[0].track, "C");
}

#[test]
fn test_rank_empty_input() {
    assert!(rank(&[]).is_empty());
}

#[test]
fn test_rank_ties_keep_first_encounter_order() {
    let events = vec![
        play("First", "X"),
        play("Second", "Y"),
        play("Third", "Z"),
    ];

    let ranked = rank(&events);

    let names: Vec<&str> = ranked.iter().map(|c| c.track.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_rank_representative_is_first_occurrence() {
    // Same title scrobbled under two artists; the first one wins attribution
    let mut events = vec![play("Hurt", "Nine Inch Nails")];
    events.push(play("Hurt", "Johnny Cash"));

    let ranked = rank(&events);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].play_count, 2);
    assert_eq!(ranked[0].artist, "Nine Inch Nails");
}

#[test]
fn test_rank_track_names_are_case_sensitive() {
    let events = vec![play("song", "X"), play("Song", "X")];

    let ranked = rank(&events);

    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_playlist_snapshot_membership() {
    let snapshot = PlaylistSnapshot::new(vec!["Song1".to_string(), "Song2".to_string()]);

    assert!(snapshot.contains_name("Song1"));
    assert!(!snapshot.contains_name("song1"));
    assert!(!snapshot.contains_name("Song3"));
    assert_eq!(snapshot.len(), 2);
    assert!(!snapshot.is_empty());
}

#[tokio::test]
async fn test_select_picks_top_candidate_when_absent() {
    let events = vec![
        play("Song1", "ArtistA"),
        play("Song1", "ArtistA"),
        play("Song2", "ArtistB"),
    ];
    let candidates = rank(&events);

    let mut resolver = MockResolver::new(vec![
        catalog_track("Song1", "ArtistA"),
        catalog_track("Song2", "ArtistB"),
    ]);
    let playlist = PlaylistSnapshot::default();

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    match result {
        SelectionResult::Selected(track) => assert_eq!(track.name, "Song1"),
        SelectionResult::NoEligibleCandidate => panic!("expected a selection"),
    }
}

#[tokio::test]
async fn test_select_skips_track_already_in_playlist() {
    let events = vec![
        play("Song1", "ArtistA"),
        play("Song1", "ArtistA"),
        play("Song2", "ArtistB"),
    ];
    let candidates = rank(&events);

    let mut resolver = MockResolver::new(vec![
        catalog_track("Song1", "ArtistA"),
        catalog_track("Song2", "ArtistB"),
    ]);
    let playlist = PlaylistSnapshot::new(vec!["Song1".to_string()]);

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    match result {
        SelectionResult::Selected(track) => assert_eq!(track.name, "Song2"),
        SelectionResult::NoEligibleCandidate => panic!("expected a selection"),
    }
}

#[tokio::test]
async fn test_select_unresolvable_candidate_yields_no_selection() {
    let candidates = rank(&[play("Song1", "ArtistA")]);

    // Catalog has nothing, the single candidate cannot resolve
    let mut resolver = MockResolver::empty();
    let playlist = PlaylistSnapshot::default();

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    assert!(matches!(result, SelectionResult::NoEligibleCandidate));
    assert_eq!(resolver.calls, vec!["Song1"]);
}

#[tokio::test]
async fn test_select_empty_history_makes_no_catalog_calls() {
    let candidates = rank(&[]);

    let mut resolver = MockResolver::empty();
    let playlist = PlaylistSnapshot::new(vec!["Song1".to_string()]);

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    assert!(matches!(result, SelectionResult::NoEligibleCandidate));
    assert!(resolver.calls.is_empty());
}

#[tokio::test]
async fn test_select_attempts_every_candidate_when_all_present() {
    let events = vec![
        play("A", "X"),
        play("A", "X"),
        play("A", "X"),
        play("B", "X"),
        play("B", "X"),
        play("C", "Y"),
    ];
    let candidates = rank(&events);

    let mut resolver = MockResolver::new(vec![
        catalog_track("A", "X"),
        catalog_track("B", "X"),
        catalog_track("C", "Y"),
    ]);
    let playlist = PlaylistSnapshot::new(vec![
        "A".to_string(),
        "B".to_string(),
        "C".to_string(),
    ]);

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    assert!(matches!(result, SelectionResult::NoEligibleCandidate));
    // Every candidate was resolved exactly once, in rank order
    assert_eq!(resolver.calls, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_select_stops_resolving_after_selection() {
    let events = vec![
        play("A", "X"),
        play("A", "X"),
        play("A", "X"),
        play("B", "X"),
        play("B", "X"),
        play("C", "Y"),
    ];
    let candidates = rank(&events);

    let mut resolver = MockResolver::new(vec![
        catalog_track("A", "X"),
        catalog_track("B", "X"),
        catalog_track("C", "Y"),
    ]);
    // A is taken, B is the pick, C must never be looked up
    let playlist = PlaylistSnapshot::new(vec!["A".to_string()]);

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    match result {
        SelectionResult::Selected(track) => assert_eq!(track.name, "B"),
        SelectionResult::NoEligibleCandidate => panic!("expected a selection"),
    }
    assert_eq!(resolver.calls, vec!["A", "B"]);
}

#[tokio::test]
async fn test_select_membership_uses_resolved_name() {
    // History reports a raw title, the catalog resolves to the same name the
    // playlist already carries
    let candidates = rank(&[play("Song1", "ArtistA")]);

    let mut resolver = MockResolver::new(vec![catalog_track("Song1", "ArtistA")]);
    let playlist = PlaylistSnapshot::new(vec!["Song1".to_string()]);

    let result = select(&candidates, &mut resolver, &playlist).await.unwrap();

    assert!(matches!(result, SelectionResult::NoEligibleCandidate));
}
