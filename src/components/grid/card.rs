//! A single icon card.

use gallery_core::GridUnit;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::dom::bounding_rect;

stylance::import_crate_style!(css, "src/components/grid/card.module.css");

/// Card for one rendered unit.
///
/// The record is resolved once through the grid side table; the selected
/// state is derived from the selection store so it cannot drift from it.
#[component]
pub fn IconCard(unit: GridUnit) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let Some(record) = ctx.gallery.with_untracked(|g| g.unit_record(unit.id).cloned()) else {
        return ().into_any();
    };

    let node_ref = NodeRef::<leptos::html::Div>::new();
    let selected = {
        let path = record.path.clone();
        Memo::new(move |_| ctx.gallery.with(|g| g.is_selected(&path)))
    };
    let class = move || {
        if selected.get() {
            format!("{} {}", css::card, css::selected)
        } else {
            css::card.to_string()
        }
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.update(|g| g.toggle_unit(unit.id));
    };
    let on_enter = move |_: leptos::ev::MouseEvent| {
        if let Some(el) = node_ref.get() {
            let anchor = bounding_rect(&el);
            ctx.update(|g| g.show_tooltip(unit.id, anchor));
        }
    };
    let on_leave = move |_: leptos::ev::MouseEvent| {
        ctx.update(|g| g.hide_tooltip(unit.id));
    };

    view! {
        <div
            node_ref=node_ref
            class=class
            role="listitem"
            aria-selected=move || selected.get().to_string()
            on:click=on_click
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <img src=record.path alt=record.name loading="lazy" />
        </div>
    }
    .into_any()
}
