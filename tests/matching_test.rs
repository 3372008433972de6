use audiomigrate::matching::*;
use audiomigrate::types::{LocalAudioItem, MatchGroup, RemoteTrack};

// Helper function to create a test audio item
fn create_test_item(id: &str, title: &str, artist: Option<&str>, album: Option<&str>) -> LocalAudioItem {
    LocalAudioItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.map(|s| s.to_string()),
        album: album.map(|s| s.to_string()),
    }
}

// Helper function to create a test remote track
fn create_test_track(id: &str, title: &str, artist: &str, album: &str) -> RemoteTrack {
    RemoteTrack {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        image: None,
    }
}

#[test]
fn test_normalize_case() {
    assert_eq!(normalize_case("The Beatles"), "the beatles");
    assert_eq!(normalize_case("HELP!"), "help!");
    assert_eq!(normalize_case("already lower"), "already lower");
    assert_eq!(normalize_case(""), "");
}

#[test]
fn test_strip_spaces_removes_only_spaces() {
    assert_eq!(strip_spaces("Abbey Road"), "AbbeyRoad");
    assert_eq!(strip_spaces("  a b  c "), "abc");

    // Other whitespace characters are kept
    assert_eq!(strip_spaces("a\tb"), "a\tb");
}

#[test]
fn test_exact_match_with_album_variant_accepted() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let candidate = create_test_track("t1", "Yesterday", "The Beatles", "Help! (Remastered)");

    let accepted = find_matches(&item, &[candidate.clone()]);
    assert_eq!(accepted, vec![candidate]);
}

#[test]
fn test_album_without_prefix_rejected() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let candidate = create_test_track("t1", "Yesterday", "The Beatles", "Yesterday and Today");

    assert!(find_matches(&item, &[candidate]).is_empty());
}

#[test]
fn test_album_prefix_is_anchored_at_the_start() {
    let item = create_test_item("a1", "Thriller", Some("Michael Jackson"), Some("Thriller"));

    let remaster = create_test_track("t1", "Thriller", "Michael Jackson", "Thriller (Remastered 2012)");
    assert_eq!(find_matches(&item, &[remaster]).len(), 1);

    // Contains the album name but doesn't start with it
    let wrong = create_test_track("t2", "Thriller", "Michael Jackson", "The Thriller");
    assert!(find_matches(&item, &[wrong]).is_empty());
}

#[test]
fn test_matching_is_case_insensitive() {
    let item = create_test_item("a1", "YESTERDAY", Some("the beatles"), Some("HELP!"));
    let candidate = create_test_track("t1", "Yesterday", "The Beatles", "Help!");

    assert_eq!(find_matches(&item, &[candidate]).len(), 1);
}

#[test]
fn test_album_comparison_ignores_spacing() {
    let item = create_test_item("a1", "Something", Some("The Beatles"), Some("Abbey Road"));
    let candidate = create_test_track("t1", "Something", "The Beatles", "AbbeyRoad");

    assert_eq!(find_matches(&item, &[candidate]).len(), 1);
}

#[test]
fn test_exact_title_required() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let candidate = create_test_track("t1", "Yesterday (Live)", "The Beatles", "Help!");

    assert!(find_matches(&item, &[candidate]).is_empty());
}

#[test]
fn test_exact_artist_required() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let candidate = create_test_track("t1", "Yesterday", "The Beatles Revival Band", "Help!");

    assert!(find_matches(&item, &[candidate]).is_empty());
}

#[test]
fn test_absent_artist_never_matches() {
    let item = create_test_item("a1", "Yesterday", None, Some("Help!"));

    // Identical title and album, any artist: absent source artist can never
    // be satisfied
    let candidate = create_test_track("t1", "Yesterday", "The Beatles", "Help!");
    assert!(find_matches(&item, &[candidate]).is_empty());

    let empty_artist = create_test_track("t2", "Yesterday", "", "Help!");
    assert!(find_matches(&item, &[empty_artist]).is_empty());
}

#[test]
fn test_absent_album_never_matches() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), None);

    let candidate = create_test_track("t1", "Yesterday", "The Beatles", "Help!");
    assert!(find_matches(&item, &[candidate]).is_empty());

    let empty_album = create_test_track("t2", "Yesterday", "The Beatles", "");
    assert!(find_matches(&item, &[empty_album]).is_empty());
}

#[test]
fn test_find_matches_preserves_candidate_order() {
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let candidates = vec![
        create_test_track("t1", "Yesterday", "The Beatles", "Help!"),
        create_test_track("t2", "Scrambled Eggs", "The Beatles", "Help!"),
        create_test_track("t3", "Yesterday", "The Beatles", "Help! (Remastered)"),
    ];

    let accepted = find_matches(&item, &candidates);
    let ids: Vec<&str> = accepted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t3"]);
}

#[test]
fn test_upsert_creates_group_on_first_acceptance() {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));

    upsert_matches(
        &mut groups,
        &item,
        vec![create_test_track("t1", "Yesterday", "The Beatles", "Help!")],
    );

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].item.id, "a1");
    assert_eq!(groups[0].matches.len(), 1);
}

#[test]
fn test_upsert_appends_to_existing_group() {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));

    upsert_matches(
        &mut groups,
        &item,
        vec![create_test_track("t1", "Yesterday", "The Beatles", "Help!")],
    );
    upsert_matches(
        &mut groups,
        &item,
        vec![create_test_track("t2", "Yesterday", "The Beatles", "Help! (Remastered)")],
    );

    // One group per item id, matches in discovery order
    assert_eq!(groups.len(), 1);
    let ids: Vec<&str> = groups[0].matches.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
}

#[test]
fn test_upsert_keeps_distinct_items_apart() {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let first = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));
    let second = create_test_item("a2", "Something", Some("The Beatles"), Some("Abbey Road"));

    upsert_matches(
        &mut groups,
        &first,
        vec![create_test_track("t1", "Yesterday", "The Beatles", "Help!")],
    );
    upsert_matches(
        &mut groups,
        &second,
        vec![create_test_track("t2", "Something", "The Beatles", "Abbey Road")],
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].item.id, "a1");
    assert_eq!(groups[1].item.id, "a2");
}

#[test]
fn test_upsert_ignores_empty_acceptance() {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let item = create_test_item("a1", "Yesterday", Some("The Beatles"), Some("Help!"));

    upsert_matches(&mut groups, &item, Vec::new());

    assert!(groups.is_empty());
}
