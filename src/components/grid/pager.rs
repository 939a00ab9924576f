//! Results count and the load more / load all actions.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/grid/pager.module.css");

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let summary = Memo::new(move |_| ctx.gallery.with(|g| g.summary()));
    let pager = Memo::new(move |_| ctx.gallery.with(|g| g.pager()));

    let load_more = move |_: leptos::ev::MouseEvent| {
        ctx.update(|g| g.load_more());
    };
    let load_all = move |_: leptos::ev::MouseEvent| {
        ctx.update(|g| g.load_all());
    };

    view! {
        <div class=css::pager>
            <span class=css::count>{move || summary.get().label()}</span>
            {move || pager.get().map(|actions| view! {
                <div class=css::buttons>
                    <button class=css::loadMore on:click=load_more>
                        {actions.load_more_label()}
                    </button>
                    <button class=css::loadAll on:click=load_all>
                        {actions.load_all_label()}
                    </button>
                </div>
            })}
        </div>
    }
}
