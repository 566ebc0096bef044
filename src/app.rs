//! Root application component providing shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::browse::BrowsePage;
use crate::state::query::QueryState;
use crate::state::results::ResultsState;
use crate::state::selection::SelectionState;

/// Root application component.
///
/// Owns all state as context-provided signals: the query tuple, the
/// current result set, and the detail-panel selection. The app has a
/// single page and no router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = RwSignal::new(QueryState::default());
    let results = RwSignal::new(ResultsState::default());
    let selection = RwSignal::new(SelectionState::default());

    provide_context(query);
    provide_context(results);
    provide_context(selection);

    view! {
        <Title text="Citadel"/>
        <BrowsePage/>
    }
}
