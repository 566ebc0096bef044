use super::*;
use crate::state::query::StatusFilter;

// =============================================================
// URL construction
// =============================================================

#[test]
fn default_query_encodes_empty_filters() {
    let url = character_url(&QueryState::default());
    assert_eq!(
        url,
        "https://rickandmortyapi.com/api/character?page=1&name=&status="
    );
}

#[test]
fn search_and_status_are_encoded_as_query_params() {
    let mut q = QueryState::default();
    q.set_search("Rick".to_owned());
    q.set_status(StatusFilter::Alive);
    // set_status resets the page; step forward afterwards.
    q.next_page(42);
    assert_eq!(
        character_url(&q),
        "https://rickandmortyapi.com/api/character?page=2&name=Rick&status=alive"
    );
}

#[test]
fn search_text_is_percent_encoded() {
    let mut q = QueryState::default();
    q.set_search("Rick Sanchez".to_owned());
    assert_eq!(
        character_url(&q),
        "https://rickandmortyapi.com/api/character?page=1&name=Rick%20Sanchez&status="
    );
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn page_body_classifies_as_page() {
    let body = r#"{
        "info": { "pages": 3 },
        "results": [{
            "id": 8,
            "name": "Adjudicator Rick",
            "status": "Dead",
            "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg",
            "origin": { "name": "unknown" },
            "location": { "name": "Citadel of Ricks" },
            "episode": ["https://rickandmortyapi.com/api/episode/28"]
        }]
    }"#;
    match classify_response(body) {
        FetchOutcome::Page { characters, pages } => {
            assert_eq!(pages, 3);
            assert_eq!(characters.len(), 1);
            assert_eq!(characters[0].name, "Adjudicator Rick");
        }
        other => panic!("expected Page, got {other:?}"),
    }
}

#[test]
fn error_body_classifies_as_empty() {
    let outcome = classify_response(r#"{"error": "There is nothing here"}"#);
    assert_eq!(outcome, FetchOutcome::Empty);
}

#[test]
fn garbage_body_classifies_as_failed() {
    assert!(matches!(
        classify_response("<html>502 Bad Gateway</html>"),
        FetchOutcome::Failed(_)
    ));
}
