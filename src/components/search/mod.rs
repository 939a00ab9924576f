//! Search field.
//!
//! Input is debounced; a new keystroke cancels the pending search. Inputs
//! shorter than the configured minimum (other than clearing the field) are
//! ignored without touching the pending timer.

use gallery_core::search::should_trigger;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/search/search.module.css");

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Dropping a `Timeout` cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);

    let placeholder = Signal::derive(move || {
        ctx.gallery.with(|g| {
            let query_active = !g.query().is_empty();
            g.summary().placeholder(query_active)
        })
    });

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        ctx.search_text.set(raw.clone());

        let (min_len, delay) = ctx
            .gallery
            .with_untracked(|g| (g.config().min_query_len, g.config().debounce_ms));
        if !should_trigger(&raw, min_len) {
            return;
        }

        let timeout = Timeout::new(delay, move || {
            ctx.update(|g| g.set_query(&raw));
        });
        pending.set_value(Some(timeout));
    };

    view! {
        <label class=css::search>
            <span class=css::icon><Icon icon=ic::SEARCH /></span>
            <input
                id="searchInput"
                class=css::input
                type="search"
                autocomplete="off"
                spellcheck="false"
                placeholder=placeholder
                prop:value=move || ctx.search_text.get()
                on:input=on_input
            />
        </label>
    }
}
