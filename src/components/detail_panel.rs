//! Detail panel for the currently selected character.

use leptos::prelude::*;

use crate::components::controls::Button;
use crate::net::types::Character;
use crate::state::selection::SelectionState;

/// Panel showing the selected character's full details; renders nothing
/// while no character is selected.
///
/// Shows the episode count only, not the episode list; episodes are bare
/// URL references the UI has no further use for.
#[component]
pub fn DetailPanel() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        {move || {
            selection
                .get()
                .character
                .map(|character| render_detail(character, selection).into_any())
        }}
    }
}

fn render_detail(character: Character, selection: RwSignal<SelectionState>) -> impl IntoView {
    let on_close = Callback::new(move |()| selection.update(SelectionState::clear));

    view! {
        <div class="detail-panel">
            <h2 class="detail-panel__name">{character.name.clone()}</h2>
            <img class="detail-panel__image" src=character.image.clone() alt=character.name.clone()/>
            <dl class="detail-panel__fields">
                <dt>"Status"</dt>
                <dd>{character.status.clone()}</dd>
                <dt>"Origin"</dt>
                <dd>{character.origin.name.clone()}</dd>
                <dt>"Location"</dt>
                <dd>{character.location.name.clone()}</dd>
                <dt>"Episodes"</dt>
                <dd>{character.episode.len()}</dd>
            </dl>
            <Button on_click=on_close>"Close"</Button>
        </div>
    }
}
