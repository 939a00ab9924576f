//! Facet dropdown: one checkbox per distinct source (or style) value.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/facets/facets.module.css");

#[component]
pub fn FacetDropdown() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let open = ctx.facet_panel_open;

    // Values only change when a catalog is loaded.
    let values = Memo::new(move |_| {
        ctx.load_state.track();
        ctx.gallery.with_untracked(|g| g.facet_values())
    });
    let label = move || ctx.gallery.with(|g| g.facet_kind().label());
    let summary = move || {
        ctx.gallery.with(|g| {
            let checked = g.facets().len();
            let total = values.with(|v| v.len());
            if checked == total {
                "All".to_string()
            } else {
                format!("{} of {}", checked, total)
            }
        })
    };
    let all_checked = move || values.with(|v| v.len()) == ctx.gallery.with(|g| g.facets().len());

    let toggle_panel = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        open.update(|o| *o = !*o);
    };

    view! {
        <div class=css::dropdown>
            <button class=css::button on:click=toggle_panel aria-expanded=move || open.get().to_string()>
                <span>{label}": "{summary}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <Show when=move || open.get()>
                <div class=css::panel on:click=|ev| ev.stop_propagation()>
                    <label class=css::option>
                        <input
                            type="checkbox"
                            prop:checked=all_checked
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                ctx.update(|g| g.set_all_facets(checked));
                            }
                        />
                        <span class=css::name>"All"</span>
                    </label>
                    <For
                        each=move || values.get()
                        key=|value| value.value.clone()
                        children=move |value| {
                            let name = value.value;
                            let display = if name.is_empty() { "(none)".to_string() } else { name.clone() };
                            let checked = {
                                let name = name.clone();
                                move || ctx.gallery.with(|g| g.facets().contains(&name))
                            };
                            let on_change = {
                                let name = name.clone();
                                move |_: leptos::ev::Event| {
                                    ctx.update(|g| g.toggle_facet(&name));
                                }
                            };
                            view! {
                                <label class=css::option>
                                    <input
                                        type="checkbox"
                                        name="facet"
                                        value=name
                                        prop:checked=checked
                                        on:change=on_change
                                    />
                                    <span class=css::name>{display}</span>
                                    <span class=css::count>{value.count}</span>
                                </label>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
