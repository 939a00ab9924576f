//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use gallery_core::Rect;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Inner viewport size in CSS pixels, `(0, 0)` when unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Viewport-relative bounding box of an element.
pub fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

// =============================================================================
// Downloads
// =============================================================================

/// Delay before a download's object URL is released.
const REVOKE_DELAY_MS: u32 = 1000;

/// Save `bytes` as `filename` through a temporary object URL.
///
/// The anchor is attached for the click and removed right after; the URL
/// is revoked later so the browser can start reading the blob first.
pub fn trigger_download(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("Window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Document not available"))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Body not available"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_viewport_size_in_browser() {
        let (width, height) = viewport_size();
        assert!(width > 0.0);
        assert!(height > 0.0);
    }

    #[wasm_bindgen_test]
    fn test_bounding_rect_of_sized_element() {
        let document = window().and_then(|w| w.document()).unwrap();
        let body = document.body().unwrap();
        let el = document.create_element("div").unwrap();
        el.set_attribute("style", "position: fixed; left: 12px; top: 30px; width: 40px; height: 20px;")
            .unwrap();
        body.append_child(&el).unwrap();

        let rect = bounding_rect(&el);
        assert_eq!((rect.left, rect.top, rect.width, rect.height), (12.0, 30.0, 40.0, 20.0));
        assert_eq!(rect.bottom(), 50.0);

        body.remove_child(&el).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_trigger_download_leaves_no_anchor() {
        let document = window().and_then(|w| w.document()).unwrap();
        let before = document.get_elements_by_tag_name("a").length();

        trigger_download(b"PK", "selected-icons.zip", "application/zip").unwrap();

        assert_eq!(document.get_elements_by_tag_name("a").length(), before);
    }
}
