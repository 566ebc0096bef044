//! Previous/Next pagination controls with a page position label.

use leptos::prelude::*;

use crate::components::controls::Button;
use crate::state::query::QueryState;
use crate::state::results::ResultsState;

/// Pagination bar. Previous is disabled on page 1, Next on the last known
/// page; there is no direct page-jump input. Page steps trigger the fetch
/// cycle through the query signal and never touch the filters.
#[component]
pub fn Pagination() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let results = expect_context::<RwSignal<ResultsState>>();

    let prev_disabled = Signal::derive(move || !query.get().can_prev());
    let next_disabled =
        Signal::derive(move || !query.get().can_next(results.get().total_pages));
    let label = move || {
        format!(
            "Page {} of {}",
            query.get().page,
            results.get().total_pages
        )
    };

    let on_prev = Callback::new(move |()| query.update(QueryState::prev_page));
    let on_next = Callback::new(move |()| {
        let pages = results.get().total_pages;
        query.update(|q| q.next_page(pages));
    });

    view! {
        <div class="pagination">
            <Button on_click=on_prev disabled=prev_disabled>
                "Previous"
            </Button>
            <p class="pagination__label">{label}</p>
            <Button on_click=on_next disabled=next_disabled>
                "Next"
            </Button>
        </div>
    }
}
