//! Hover tooltip with the icon name and tags.
//!
//! There is a single tooltip node; showing another card's tooltip replaces
//! its content. It is rendered hidden, measured, then placed.

use gallery_core::{Rect, place_tooltip};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::dom::{bounding_rect, viewport_size};

stylance::import_crate_style!(css, "src/components/grid/tooltip.module.css");

#[derive(Clone, Debug, PartialEq)]
struct TooltipContent {
    anchor: Rect,
    name: String,
    tags: Vec<String>,
}

#[component]
pub fn IconTooltip() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let content = Memo::new(move |_| {
        ctx.gallery.with(|g| {
            g.tooltip().map(|(active, record)| TooltipContent {
                anchor: active.anchor,
                name: record.name.clone(),
                tags: record.tags.clone(),
            })
        })
    });

    let node_ref = NodeRef::<leptos::html::Div>::new();
    let position = RwSignal::new(None::<(f64, f64)>);

    // Measure after the new content is in the DOM.
    Effect::new(move || {
        let Some(current) = content.get() else {
            position.set(None);
            return;
        };
        position.set(None);
        if let Some(el) = node_ref.get() {
            let measured = bounding_rect(&el);
            position.set(Some(place_tooltip(
                current.anchor,
                (measured.width, measured.height),
                viewport_size(),
            )));
        }
    });

    let style = move || match position.get() {
        Some((left, top)) => format!("left: {}px; top: {}px;", left, top),
        None => "left: 0; top: 0; visibility: hidden;".to_string(),
    };

    move || {
        content.get().map(|current| {
            let tags = (!current.tags.is_empty()).then(|| {
                view! {
                    <div class=css::tags>
                        {current
                            .tags
                            .into_iter()
                            .map(|tag| view! { <span class=css::tag>{tag}</span> })
                            .collect_view()}
                    </div>
                }
            });
            view! {
                <div node_ref=node_ref class=css::tooltip style=style role="tooltip">
                    <div class=css::name>{current.name}</div>
                    {tags}
                </div>
            }
        })
    }
}
