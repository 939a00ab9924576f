//! Download control: zips the selection and saves it client-side.

use gallery_core::build_archive;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::WebFetcher;
use crate::utils::dom::trigger_download;

stylance::import_crate_style!(css, "src/components/cart/download.module.css");

const ZIP_MIME: &str = "application/zip";

/// Disabled while the selection is empty and while a build is running.
///
/// The build works on a snapshot of the selection and catalog taken at
/// click time. It cannot be cancelled once started.
#[component]
pub fn DownloadButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let archiving = ctx.archiving;

    let enabled = Memo::new(move |_| ctx.gallery.with(|g| g.cart_view().download_enabled));

    let start = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if archiving.get_untracked() || !enabled.get_untracked() {
            return;
        }

        let (selection, catalog, filename) = ctx.gallery.with_untracked(|g| {
            (
                g.selection().clone(),
                g.catalog(),
                g.config().archive_name.clone(),
            )
        });
        archiving.set(true);

        spawn_local(async move {
            match build_archive(&selection, &catalog, &WebFetcher).await {
                // Skipped assets are already logged by the builder.
                Ok(archive) => {
                    if archive.is_empty() {
                        warn!("No icons could be fetched; nothing to download");
                    } else if let Err(e) = trigger_download(&archive.bytes, &filename, ZIP_MIME) {
                        error!("Error triggering download: {:?}", e);
                    } else {
                        log!("Downloaded {} icons as {}", archive.entries.len(), filename);
                    }
                }
                Err(e) => error!("Error creating zip file: {}", e),
            }
            archiving.set(false);
        });
    };

    view! {
        <button
            id="downloadBtn"
            class=css::download
            disabled=move || archiving.get() || !enabled.get()
            on:click=start
        >
            {move || if archiving.get() {
                view! { <span class=css::spinning><Icon icon=ic::SPINNER /></span> " Preparing..." }.into_any()
            } else {
                view! { <Icon icon=ic::DOWNLOAD /> " Download" }.into_any()
            }}
        </button>
    }
}
