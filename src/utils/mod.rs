//! Browser utilities.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with timeout
//! - [`WebFetcher`] - Fetch API backed asset source for archiving
//! - [`dom`] - Viewport, element geometry and client-side downloads

pub mod dom;
mod fetch;

pub use fetch::{WebFetcher, fetch_text};
