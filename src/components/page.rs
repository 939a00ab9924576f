//! Page layout: toolbar over the icon grid.

use leptos::prelude::*;

use crate::app::{AppContext, LoadState};
use crate::components::cart::{Cart, DownloadButton};
use crate::components::facets::FacetDropdown;
use crate::components::grid::{IconGrid, IconTooltip, Pager};
use crate::components::search::SearchBar;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/page.module.css");

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let status = move || match ctx.load_state.get() {
        LoadState::Loading => Some(view! { <p class=css::status>"Loading icons..."</p> }.into_any()),
        LoadState::Ready => None,
        LoadState::Failed(e) => Some(
            view! { <p class=css::statusError>"Could not load icons: " {e}</p> }.into_any(),
        ),
    };

    view! {
        <div class=css::page>
            <header class=css::toolbar>
                <h1 class=css::title>{APP_NAME}</h1>
                <SearchBar />
                <FacetDropdown />
                <div class=css::actions>
                    <Cart />
                    <DownloadButton />
                </div>
            </header>
            <main class=css::content>
                {status}
                <IconGrid />
                <Pager />
            </main>
            <IconTooltip />
        </div>
    }
}
