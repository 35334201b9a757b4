use scdlcli::selection::TrackSelection;
use scdlcli::types::{AudioSource, Track};
use scdlcli::utils::*;
use serde_json::json;

// Helper function to create a test track from a payload fragment
fn create_test_track(payload: serde_json::Value) -> Track {
    serde_json::from_value(payload).expect("test track payload must deserialize")
}

// Helper that replays the orchestrator's loop: positions are enumerated in
// catalog order and the success counter advances on every accepted track.
fn accepted_positions(selection: &TrackSelection, candidates: usize) -> Vec<usize> {
    let mut downloaded = 0;
    let mut accepted = Vec::new();
    for position in 1..=candidates {
        if selection.should_download(position, downloaded) {
            accepted.push(position);
            downloaded += 1;
        }
    }
    accepted
}

#[test]
fn test_no_rules_accepts_everything() {
    let selection = TrackSelection::default();

    // empty include/exclude sets never match; no limit, no range
    assert_eq!(
        accepted_positions(&selection, 5),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_limit_yields_exactly_n_in_order() {
    let selection = TrackSelection::new(Some(3), Vec::new(), Vec::new(), None);

    // exactly N accepted, ascending positions
    assert_eq!(accepted_positions(&selection, 10), vec![1, 2, 3]);
}

#[test]
fn test_include_overrides_exclude_and_range() {
    let selection = TrackSelection::new(None, vec![5], vec![5], Some((1, 2)));

    // position 5 is excluded and outside the range, but include wins
    assert!(selection.should_download(5, 0));

    // a position matched by no rule still falls to the range
    assert!(!selection.should_download(4, 0));
}

#[test]
fn test_exclude_rejects_position() {
    let selection = TrackSelection::new(None, Vec::new(), vec![2, 4], None);

    assert_eq!(accepted_positions(&selection, 5), vec![1, 3, 5]);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let selection = TrackSelection::new(None, Vec::new(), Vec::new(), Some((3, 5)));

    assert_eq!(accepted_positions(&selection, 8), vec![3, 4, 5]);
}

#[test]
fn test_inverted_range_rejects_every_position() {
    let selection = TrackSelection::new(None, Vec::new(), Vec::new(), Some((7, 3)));

    assert_eq!(accepted_positions(&selection, 10), Vec::<usize>::new());
}

#[test]
fn test_limit_cutoff_precedes_include() {
    // limit=2, include={5}: positions 1 and 2 fill the limit, 3-4 are cut
    // off, and position 5 is rejected too because the limit check runs
    // before include membership
    let selection = TrackSelection::new(Some(2), vec![5], Vec::new(), None);

    assert_eq!(accepted_positions(&selection, 10), vec![1, 2]);
    assert!(!selection.should_download(5, 2));
}

#[test]
fn test_sanitize_replaces_hostile_characters() {
    assert_eq!(sanitize("Normal Title"), "Normal Title");
    assert_eq!(sanitize("a/b\\c:d"), "a_b_c_d");
    assert_eq!(sanitize("what?*\"<>|"), "what______");
    assert_eq!(sanitize("tab\there"), "tab_here");
}

#[test]
fn test_sanitize_trims_dots_and_whitespace() {
    assert_eq!(sanitize("  spaced  "), "spaced");
    assert_eq!(sanitize("trailing..."), "trailing");
    assert_eq!(sanitize("..."), "untitled");
    assert_eq!(sanitize(""), "untitled");
}

#[test]
fn test_track_title_falls_back_to_id() {
    let titled = create_test_track(json!({"id": 42, "title": "Night Drive"}));
    assert_eq!(track_title(&titled), "Night Drive");

    let untitled = create_test_track(json!({"id": 42}));
    assert_eq!(track_title(&untitled), "42");
}

#[test]
fn test_track_artist_prefers_publisher_metadata() {
    let track = create_test_track(json!({
        "id": 1,
        "publisher_metadata": {"artist": "Label Artist"},
        "user": {"id": 2, "username": "uploader"}
    }));
    assert_eq!(track_artist(&track), "Label Artist");
}

#[test]
fn test_track_artist_falls_back_to_uploader_then_unknown() {
    let uploaded = create_test_track(json!({
        "id": 1,
        "publisher_metadata": {"artist": ""},
        "user": {"id": 2, "username": "uploader"}
    }));
    assert_eq!(track_artist(&uploaded), "uploader");

    let orphaned = create_test_track(json!({"id": 1}));
    assert_eq!(track_artist(&orphaned), "unknown");
}

#[test]
fn test_build_filename() {
    let track = create_test_track(json!({
        "id": 1,
        "title": "So What",
        "user": {"id": 2, "username": "miles"}
    }));
    let source = AudioSource {
        url: "https://cdn.example/audio".to_string(),
        format: "mp3".to_string(),
    };
    let metadata = track_metadata(&track, &source);

    assert_eq!(build_filename(&metadata), "miles - So What.mp3");
}

#[test]
fn test_track_metadata_carries_source_and_tags() {
    let track = create_test_track(json!({
        "id": 1,
        "title": "So What",
        "genre": "jazz",
        "release_year": 1959,
        "artwork_url": "https://img.example/cover.jpg",
        "user": {"id": 2, "username": "miles"}
    }));
    let source = AudioSource {
        url: "https://cdn.example/audio".to_string(),
        format: "wav".to_string(),
    };

    let metadata = track_metadata(&track, &source);
    assert_eq!(metadata.format, "wav");
    assert_eq!(metadata.download_url, "https://cdn.example/audio");
    assert_eq!(metadata.year, Some(1959));
    assert_eq!(metadata.genre.as_deref(), Some("jazz"));
    assert_eq!(
        metadata.artwork_url.as_deref(),
        Some("https://img.example/cover.jpg")
    );
}
