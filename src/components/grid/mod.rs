//! Icon grid, pager and hover tooltip.
//!
//! Cards are keyed by [`UnitId`](gallery_core::UnitId): appending a page
//! keeps every existing card node, while a rebuild issues fresh ids so the
//! whole grid is replaced.

mod card;
mod pager;
mod tooltip;

use leptos::prelude::*;

use crate::app::AppContext;

use card::IconCard;
pub use pager::Pager;
pub use tooltip::IconTooltip;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn IconGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Selection and tooltip changes leave the unit list equal, so the
    // `For` below is not re-diffed for them.
    let units = Memo::new(move |_| ctx.gallery.with(|g| g.grid().units().to_vec()));

    view! {
        <div id="iconGrid" class=css::grid role="list">
            <For
                each=move || units.get()
                key=|unit| unit.id
                children=move |unit| view! { <IconCard unit=unit /> }
            />
        </div>
    }
}
