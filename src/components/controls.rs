//! Stateless presentational primitives: card, button, text input, select.
//!
//! These carry no logic of their own; they wrap the basic interactive
//! elements with the app's styling and surface events through callbacks so
//! the composing page owns all state.

use leptos::prelude::*;

/// Bordered container for grid items.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

/// Styled button surfacing clicks through a callback.
#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<()>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="btn"
            prop:disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Controlled text input.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="input"
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Controlled select; options come in as `SelectItem` children.
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class="select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {children()}
        </select>
    }
}

/// One option inside a `Select`.
#[component]
pub fn SelectItem(value: &'static str, children: Children) -> impl IntoView {
    view! { <option value=value>{children()}</option> }
}
