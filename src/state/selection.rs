#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::Character;

/// The zero-or-one character currently shown in the detail panel.
///
/// Set by the card's "View Details" action, cleared by the panel's "Close"
/// action, and cleared whenever a new fetch cycle is triggered so the panel
/// never shows data inconsistent with the current filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub character: Option<Character>,
}

impl SelectionState {
    pub fn select(&mut self, character: Character) {
        self.character = Some(character);
    }

    pub fn clear(&mut self) {
        self.character = None;
    }
}
