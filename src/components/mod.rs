//! UI components built with Leptos.
//!
//! - [`GalleryPage`] - Page layout (main entry point)
//! - [`search`] - Debounced search field
//! - [`facets`] - Facet dropdown with checkboxes
//! - [`grid`] - Icon grid, pager and hover tooltip
//! - [`cart`] - Cart button, cart panel and download control
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod cart;
pub mod facets;
pub mod grid;
pub mod icons;
mod page;
pub mod search;

pub use page::GalleryPage;
