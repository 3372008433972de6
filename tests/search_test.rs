use audiomigrate::spotify::{SearchTerms, search::build_query};

#[test]
fn test_build_query_scopes_all_fields() {
    let terms = SearchTerms {
        title: "Yesterday".to_string(),
        artist: Some("The Beatles".to_string()),
        album: Some("Help!".to_string()),
    };

    assert_eq!(
        build_query(&terms),
        "yesterday track:yesterday album:help! artist:the beatles"
    );
}

#[test]
fn test_build_query_lowercases_terms() {
    let terms = SearchTerms {
        title: "THRILLER".to_string(),
        artist: Some("Michael JACKSON".to_string()),
        album: Some("Thriller".to_string()),
    };

    let query = build_query(&terms);
    assert_eq!(query, query.to_lowercase());
}

#[test]
fn test_build_query_omits_absent_fields() {
    let terms = SearchTerms {
        title: "Yesterday".to_string(),
        artist: None,
        album: None,
    };

    assert_eq!(build_query(&terms), "yesterday track:yesterday");
}
