//! Icon gallery pipeline: catalog, search, facet filtering, display window,
//! selection store and archive packaging.
//!
//! Target-independent; the browser app and the CLI both drive it.
//!
//! - [`Catalog`], [`IconRecord`] - loaded catalog (bare array or `{ icons }`)
//! - [`search`], [`facet`] - the filter pipeline
//! - [`DisplayWindow`], [`Grid`] - paginated rendering model with stable card ids
//! - [`Cart`], [`SelectionSet`] - selection store and derived cart view
//! - [`build_archive`] - fetch, name, de-duplicate and zip the selection
//! - [`Gallery`] - coordinator owning all of the above
//! - [`import`] - catalog generation from an icon directory

pub mod archive;
pub mod cart;
pub mod catalog;
pub mod config;
mod console;
pub mod error;
pub mod facet;
pub mod gallery;
pub mod grid;
pub mod import;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod tooltip;

pub use archive::{Archive, ArchiveBuilder, AssetFetcher, SkipReason, SkippedAsset, build_archive};
pub use cart::{Cart, CartItem, CartView, Membership};
pub use catalog::{Catalog, CatalogDocument, CatalogEntry, IconRecord};
pub use config::GalleryConfig;
pub use error::{ArchiveError, CatalogError, FetchError, GalleryError};
pub use facet::{FacetKind, FacetSelection, FacetValue};
pub use gallery::Gallery;
pub use grid::{Grid, GridChange, GridUnit, UnitId};
pub use pagination::{DisplayWindow, PagerActions, ResultsSummary};
pub use selection::SelectionSet;
pub use tooltip::{ActiveTooltip, Rect, TooltipState, place_tooltip};
