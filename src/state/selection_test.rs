use super::*;
use crate::net::types::LocationRef;

fn rick() -> Character {
    Character {
        id: 1,
        name: "Rick Sanchez".to_owned(),
        status: "Alive".to_owned(),
        image: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".to_owned(),
        origin: LocationRef {
            name: "Earth (C-137)".to_owned(),
        },
        location: LocationRef {
            name: "Citadel of Ricks".to_owned(),
        },
        episode: vec![
            "https://rickandmortyapi.com/api/episode/1".to_owned(),
            "https://rickandmortyapi.com/api/episode/2".to_owned(),
        ],
    }
}

#[test]
fn selection_defaults_to_none() {
    let s = SelectionState::default();
    assert!(s.character.is_none());
}

#[test]
fn select_sets_that_exact_record() {
    let mut s = SelectionState::default();
    s.select(rick());
    assert_eq!(s.character.as_ref().map(|c| c.id), Some(1));
    assert_eq!(s.character.as_ref().map(|c| c.episode.len()), Some(2));
}

#[test]
fn clear_always_empties_selection() {
    let mut s = SelectionState::default();
    s.clear();
    assert!(s.character.is_none());

    s.select(rick());
    s.clear();
    assert!(s.character.is_none());
}
