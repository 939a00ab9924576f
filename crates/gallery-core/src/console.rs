//! Browser console logging.
//!
//! Forwards to `web_sys::console` when running in the browser and does
//! nothing on native targets, where callers surface the same information
//! through return values instead.

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
