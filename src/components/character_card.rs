//! Grid card for a single character in the current result set.

use leptos::prelude::*;

use crate::components::controls::{Button, Card};
use crate::net::types::Character;
use crate::state::selection::SelectionState;

/// A card showing a character's portrait, name, and life status, with a
/// "View Details" action that selects it for the detail panel. Selecting
/// never triggers a network call; it is purely local state.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let on_view = {
        let character = character.clone();
        Callback::new(move |()| {
            #[cfg(feature = "csr")]
            log::debug!("selected character {} ({})", character.id, character.name);
            let character = character.clone();
            selection.update(|s| s.select(character));
        })
    };

    view! {
        <Card>
            <img class="card__image" src=character.image.clone() alt=character.name.clone()/>
            <p class="card__name">{character.name.clone()}</p>
            <p class="card__status">{format!("Status: {}", character.status)}</p>
            <Button on_click=on_view>"View Details"</Button>
        </Card>
    }
}
