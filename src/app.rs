//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] definition and the
//! catalog bootstrap.

use gallery_core::{Catalog, Gallery, GridChange};
use leptos::ev;
use leptos::logging::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::GalleryPage;
use crate::config::{CATALOG_URL, gallery_config};
use crate::utils::fetch_text;

// ============================================================================
// LoadState
// ============================================================================

/// Catalog bootstrap progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The catalog could not be fetched or parsed; the gallery stays empty.
    Failed(String),
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The [`Gallery`] coordinator is the single owner of pipeline state
/// (catalog, query, facets, window, grid, cart, tooltip). Components read
/// it through `with` and mutate it through [`AppContext::update`]; the
/// remaining signals are view-only UI state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pipeline state.
    pub gallery: RwSignal<Gallery>,
    /// Catalog bootstrap progress.
    pub load_state: RwSignal<LoadState>,
    /// Raw text of the search field (may be gated or pending debounce).
    pub search_text: RwSignal<String>,
    /// Whether the facet dropdown panel is shown.
    pub facet_panel_open: RwSignal<bool>,
    /// An archive build is in flight.
    pub archiving: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let gallery = match Gallery::new(gallery_config()) {
            Ok(gallery) => gallery,
            Err(e) => {
                error!("Invalid gallery configuration, using defaults: {}", e);
                Gallery::default()
            }
        };

        Self {
            gallery: RwSignal::new(gallery),
            load_state: RwSignal::new(LoadState::Loading),
            search_text: RwSignal::new(String::new()),
            facet_panel_open: RwSignal::new(false),
            archiving: RwSignal::new(false),
        }
    }

    /// Mutate the coordinator and return what the operation reported.
    ///
    /// `None` only once the signal has been disposed.
    pub fn update<R>(&self, f: impl FnOnce(&mut Gallery) -> R) -> Option<R> {
        self.gallery.try_update(f)
    }

    /// Close both dropdown panels (click outside).
    pub fn close_panels(&self) {
        self.facet_panel_open.set(false);
        if self.gallery.with_untracked(|g| g.cart_view().panel_open) {
            self.gallery.update(|g| g.close_cart_panel());
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch and parse the catalog, then hand it to the coordinator.
///
/// Failures are logged and leave the catalog empty; there is no retry.
fn load_catalog(ctx: AppContext) {
    spawn_local(async move {
        let asset_dir = ctx.gallery.with_untracked(|g| g.config().asset_dir.clone());

        let catalog = match fetch_text(CATALOG_URL).await {
            Ok(json) => Catalog::from_json(&json, &asset_dir).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match catalog {
            Ok(catalog) => {
                log!("Icons loaded: {} records", catalog.len());
                if let Some(GridChange::Rebuilt { len }) = ctx.update(|g| g.load_catalog(catalog)) {
                    log!("Displaying {} icons", len);
                }
                ctx.load_state.set(LoadState::Ready);
            }
            Err(e) => {
                error!("Error loading icons: {}", e);
                ctx.load_state.set(LoadState::Failed(e));
            }
        }
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the catalog fetch
/// - Closes open dropdowns on clicks that reach the window
/// - Renders the gallery page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    load_catalog(ctx);

    // Panels stop propagation of their own clicks.
    let outside_click = window_event_listener(ev::click, move |_| ctx.close_panels());
    on_cleanup(move || outside_click.remove());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7f7f9;
                    color: #222;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #666; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #fff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #888;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #c0392b;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <GalleryPage />
        </ErrorBoundary>
    }
}
