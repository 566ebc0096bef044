//! Search and status filter controls.

use leptos::prelude::*;

use crate::components::controls::{Input, Select, SelectItem};
use crate::state::query::{QueryState, StatusFilter};

/// Free-text name search plus life-status selector.
///
/// Matching semantics are entirely the API's; no local filtering happens
/// here. Every change (including each keystroke in the search box) updates
/// the query signal, which re-runs the fetch cycle. Both setters reset the
/// page to 1.
#[component]
pub fn FilterBar() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    let search = Signal::derive(move || query.get().search);
    let status = Signal::derive(move || query.get().status.as_param().to_owned());

    let on_search = Callback::new(move |text: String| query.update(|q| q.set_search(text)));
    let on_status = Callback::new(move |value: String| {
        query.update(|q| q.set_status(StatusFilter::from_param(&value)));
    });

    view! {
        <div class="filter-bar">
            <Input value=search on_input=on_search placeholder="Search by name..."/>
            <Select value=status on_change=on_status>
                {StatusFilter::ALL_OPTIONS
                    .into_iter()
                    .map(|option| {
                        view! { <SelectItem value=option.as_param()>{option.label()}</SelectItem> }
                    })
                    .collect::<Vec<_>>()}
            </Select>
        </div>
    }
}
