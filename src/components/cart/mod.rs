//! Cart button with count badge, the cart panel, and the download control.
//!
//! Everything here renders from [`CartView`](gallery_core::CartView), which
//! the coordinator derives from the selection on every read.

mod download;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

pub use download::DownloadButton;

stylance::import_crate_style!(css, "src/components/cart/cart.module.css");

#[component]
pub fn Cart() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let view_state = Memo::new(move |_| ctx.gallery.with(|g| g.cart_view()));
    let count = move || view_state.with(|v| v.count);
    let enabled = move || view_state.with(|v| v.cart_enabled);
    let open = move || view_state.with(|v| v.panel_open);

    let toggle_panel = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.facet_panel_open.set(false);
        ctx.update(|g| g.toggle_cart_panel());
    };

    view! {
        <div class=css::cart>
            <button
                id="cartBtn"
                class=css::cartButton
                disabled=move || !enabled()
                on:click=toggle_panel
                title="Selected icons"
            >
                <Icon icon=ic::CART />
                <span class=css::badge>{count}</span>
            </button>
            <Show when=open>
                <div class=css::panel on:click=|ev| ev.stop_propagation()>
                    <For
                        each=move || view_state.with(|v| v.items.clone())
                        key=|item| item.path.clone()
                        children=move |item| {
                            let path = item.path.clone();
                            let remove = move |_: leptos::ev::MouseEvent| {
                                ctx.update(|g| g.remove_from_cart(&path));
                            };
                            view! {
                                <div class=css::item>
                                    <img src=item.path alt=item.name.clone() />
                                    <span class=css::itemName>{item.name}</span>
                                    <button class=css::removeButton on:click=remove title="Remove">
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
