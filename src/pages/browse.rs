//! The single browse page: filters, result grid, pagination, detail panel.

use leptos::prelude::*;

use crate::components::character_card::CharacterCard;
use crate::components::detail_panel::DetailPanel;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::state::query::QueryState;
use crate::state::results::ResultsState;
use crate::state::selection::SelectionState;
use crate::util::dark_mode;

/// Browse page owning the fetch cycle.
///
/// An effect tracks the query signal, so the cycle runs once on mount and
/// again on every page, search, or status change. Each run clears the
/// selection (the panel must never show a record from a superseded result
/// set) and tags the request; `ResultsState::settle` drops responses whose
/// tag is no longer current, so overlapping requests resolve to the latest
/// user intent rather than whichever response lands last.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let results = expect_context::<RwSignal<ResultsState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();

    Effect::new(move || {
        let q = query.get();
        selection.update(SelectionState::clear);
        let seq = results.try_update(ResultsState::begin_fetch).unwrap_or(0);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_characters(&q).await;
            log::debug!("fetch #{seq} settled for page {}: {outcome:?}", q.page);
            results.update(|r| r.settle(seq, outcome));
        });
        #[cfg(not(feature = "csr"))]
        let _ = (q, seq);
    });

    // Dark mode is applied once from the stored preference; the toggle
    // button persists changes itself.
    let dark = RwSignal::new(dark_mode::read_preference());
    Effect::new(move || dark_mode::apply(dark.get_untracked()));
    let on_toggle_dark = move |_| dark.set(dark_mode::toggle(dark.get()));

    view! {
        <div class="browse-page">
            <header class="browse-page__header">
                <h1>"Rick and Morty Characters"</h1>
                <button
                    class="btn browse-page__dark-toggle"
                    title="Toggle dark mode"
                    on:click=on_toggle_dark
                >
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
            </header>

            <FilterBar/>

            <Show when=move || results.get().loading>
                <p class="browse-page__loading">"Loading..."</p>
            </Show>
            {move || {
                results
                    .get()
                    .error
                    .map(|msg| view! { <p class="browse-page__error">{msg}</p> })
            }}

            <div class="browse-page__grid">
                {move || {
                    results
                        .get()
                        .characters
                        .into_iter()
                        .map(|character| view! { <CharacterCard character=character/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Pagination/>
            <DetailPanel/>
        </div>
    }
}
