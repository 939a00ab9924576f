//! Gallery coordinator.
//!
//! Owns all process-scoped state: the catalog, the active query and facet
//! selection, the filtered view, the display window, the rendered grid, the
//! cart and the live tooltip. The catalog is initialized once on load; every
//! search or facet change recomputes the filtered view, resets the window
//! and rebuilds the grid.

use std::sync::Arc;

use crate::cart::{Cart, CartView, Membership};
use crate::catalog::{Catalog, IconRecord};
use crate::config::GalleryConfig;
use crate::console;
use crate::error::GalleryError;
use crate::facet::{self, FacetKind, FacetSelection, FacetValue};
use crate::grid::{Grid, GridChange, UnitId};
use crate::pagination::{DisplayWindow, PagerActions, ResultsSummary};
use crate::search;
use crate::selection::SelectionSet;
use crate::tooltip::{ActiveTooltip, Rect, TooltipState};

#[derive(Clone, Debug)]
pub struct Gallery {
    config: GalleryConfig,
    catalog: Arc<Catalog>,
    query: String,
    facets: FacetSelection,
    filtered: Vec<usize>,
    window: DisplayWindow,
    grid: Grid,
    cart: Cart,
    tooltip: TooltipState,
}

impl Gallery {
    /// An empty gallery. Fails if the configuration is unusable.
    pub fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: GalleryConfig) -> Self {
        Self {
            window: DisplayWindow::new(config.page_size),
            config,
            catalog: Arc::new(Catalog::empty()),
            query: String::new(),
            facets: FacetSelection::none(),
            filtered: Vec::new(),
            grid: Grid::new(),
            cart: Cart::new(),
            tooltip: TooltipState::default(),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Install a freshly loaded catalog.
    ///
    /// Every facet value is checked, selections that no longer resolve are
    /// dropped, and the grid is rebuilt for the current query.
    pub fn load_catalog(&mut self, catalog: Catalog) -> GridChange {
        self.catalog = Arc::new(catalog);
        self.facets = FacetSelection::all_of(&self.catalog, self.config.facet);
        let dropped = self.cart.retain_known(&self.catalog);
        if dropped > 0 {
            console::warn(&format!("Dropped {} selections missing from catalog", dropped));
        }
        self.refresh()
    }

    /// Shared handle to the catalog, for work that outlives a borrow.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn record(&self, index: usize) -> Option<&IconRecord> {
        self.catalog.get(index)
    }

    // =========================================================================
    // Search and facets
    // =========================================================================

    /// Apply a query edit.
    ///
    /// Returns `None` when the input is gated (non-empty but shorter than
    /// the minimum length) and the current results stay in place.
    pub fn set_query(&mut self, raw: &str) -> Option<GridChange> {
        if !search::should_trigger(raw, self.config.min_query_len) {
            return None;
        }
        self.query = search::normalize_query(raw);
        Some(self.refresh())
    }

    /// The active, normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn facet_kind(&self) -> FacetKind {
        self.config.facet
    }

    /// Facet values for the dropdown, with record counts.
    pub fn facet_values(&self) -> Vec<FacetValue> {
        facet::facet_values(&self.catalog, self.config.facet)
    }

    pub fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    pub fn toggle_facet(&mut self, value: &str) -> GridChange {
        self.facets.toggle(value);
        self.refresh()
    }

    /// Check or uncheck every facet value at once.
    pub fn set_all_facets(&mut self, checked: bool) -> GridChange {
        self.facets = if checked {
            FacetSelection::all_of(&self.catalog, self.config.facet)
        } else {
            FacetSelection::none()
        };
        self.refresh()
    }

    /// Recompute the filtered view from scratch and rebuild the grid.
    fn refresh(&mut self) -> GridChange {
        self.filtered = facet::apply(&self.catalog, &self.query, self.config.facet, &self.facets);
        self.window.reset();
        self.tooltip.clear();
        let end = self.window.visible_len(self.filtered.len());
        self.grid.rebuild(&self.filtered[..end])
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Reveal one more page without touching rendered cards.
    pub fn load_more(&mut self) -> GridChange {
        if !self.window.has_more(self.filtered.len()) {
            return GridChange::Unchanged;
        }
        self.window.load_more();
        self.extend()
    }

    /// Reveal every filtered result without touching rendered cards.
    pub fn load_all(&mut self) -> GridChange {
        if !self.window.has_more(self.filtered.len()) {
            return GridChange::Unchanged;
        }
        self.window.load_all(self.filtered.len());
        self.extend()
    }

    fn extend(&mut self) -> GridChange {
        let end = self.window.visible_len(self.filtered.len());
        self.grid.append(&self.filtered[..end])
    }

    /// Indices of every filtered record, in catalog order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn window(&self) -> DisplayWindow {
        self.window
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rendered cards with their records.
    pub fn visible(&self) -> impl Iterator<Item = (UnitId, &IconRecord)> + '_ {
        self.grid
            .units()
            .iter()
            .filter_map(|unit| Some((unit.id, self.catalog.get(unit.record)?)))
    }

    /// Resolve a rendered card to its record through the side table.
    pub fn unit_record(&self, unit: UnitId) -> Option<&IconRecord> {
        self.grid.record_of(unit).and_then(|i| self.catalog.get(i))
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            shown: self.grid.len(),
            matched: self.filtered.len(),
            total: self.catalog.len(),
        }
    }

    pub fn pager(&self) -> Option<PagerActions> {
        PagerActions::for_window(&self.window, self.filtered.len())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flip the selection of a catalog path.
    pub fn toggle_selection(&mut self, path: &str) -> Result<Membership, GalleryError> {
        if !self.catalog.contains(path) {
            return Err(GalleryError::UnknownIcon(path.to_string()));
        }
        Ok(self.cart.toggle(path))
    }

    /// Flip the selection of the record behind a rendered card.
    pub fn toggle_unit(&mut self, unit: UnitId) -> Option<Membership> {
        let path = self.unit_record(unit)?.path.clone();
        Some(self.cart.toggle(&path))
    }

    pub fn remove_from_cart(&mut self, path: &str) -> bool {
        self.cart.remove(path)
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.cart.is_selected(path)
    }

    pub fn selection(&self) -> &SelectionSet {
        self.cart.selection()
    }

    pub fn cart_view(&self) -> CartView {
        self.cart.view(&self.catalog)
    }

    pub fn toggle_cart_panel(&mut self) -> bool {
        self.cart.toggle_panel()
    }

    pub fn close_cart_panel(&mut self) {
        self.cart.close_panel();
    }

    // =========================================================================
    // Tooltip
    // =========================================================================

    /// Show the tooltip for a rendered card, replacing any other.
    pub fn show_tooltip(&mut self, unit: UnitId, anchor: Rect) -> bool {
        if self.grid.record_of(unit).is_none() {
            return false;
        }
        self.tooltip.show(unit, anchor);
        true
    }

    pub fn hide_tooltip(&mut self, unit: UnitId) {
        self.tooltip.hide(unit);
    }

    /// The live tooltip and the record it describes.
    pub fn tooltip(&self) -> Option<(ActiveTooltip, &IconRecord)> {
        let active = self.tooltip.current()?;
        Some((active, self.unit_record(active.unit)?))
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_config(GalleryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn entries(n: usize) -> Vec<CatalogEntry> {
        (0..n)
            .map(|i| CatalogEntry {
                filename: format!("icon{}.svg", i),
                name: Some(format!("Icon {}", i)),
                source: Some(if i % 2 == 0 { "even" } else { "odd" }.to_string()),
                ..Default::default()
            })
            .collect()
    }

    fn gallery(n: usize, page: usize) -> Gallery {
        let config = GalleryConfig::default().with_page_size(page);
        let mut gallery = Gallery::new(config).unwrap();
        gallery.load_catalog(Catalog::from_entries(entries(n), "icons"));
        gallery
    }

    #[test]
    fn test_load_checks_all_facets() {
        let gallery = gallery(5, 10);
        assert_eq!(gallery.facets().len(), 2);
        assert_eq!(gallery.summary(), ResultsSummary { shown: 5, matched: 5, total: 5 });
        assert!(gallery.pager().is_none());
    }

    #[test]
    fn test_short_query_is_gated() {
        let mut gallery = gallery(5, 10);
        assert_eq!(gallery.set_query("i"), None);
        assert_eq!(gallery.query(), "");
        assert!(gallery.set_query("Icon 3").is_some());
        assert_eq!(gallery.filtered().len(), 1);
        assert!(gallery.set_query("").is_some());
        assert_eq!(gallery.filtered().len(), 5);
    }

    #[test]
    fn test_filter_change_resets_window() {
        let mut gallery = gallery(25, 10);
        gallery.load_more();
        assert_eq!(gallery.grid().len(), 20);

        assert_eq!(gallery.toggle_facet("odd"), GridChange::Rebuilt { len: 10 });
        assert_eq!(gallery.window().count(), 10);
        assert_eq!(gallery.filtered().len(), 13);
    }

    #[test]
    fn test_load_more_and_load_all() {
        let mut gallery = gallery(25, 10);
        assert_eq!(gallery.load_more(), GridChange::Appended { start: 10, end: 20 });
        assert_eq!(gallery.load_all(), GridChange::Appended { start: 20, end: 25 });
        assert_eq!(gallery.load_more(), GridChange::Unchanged);
        assert_eq!(gallery.load_all(), GridChange::Unchanged);
    }

    #[test]
    fn test_toggle_unknown_path() {
        let mut gallery = gallery(2, 10);
        assert_eq!(
            gallery.toggle_selection("icons/nope.svg"),
            Err(GalleryError::UnknownIcon("icons/nope.svg".to_string()))
        );
        assert!(gallery.selection().is_empty());
    }

    #[test]
    fn test_toggle_unit_uses_side_table() {
        let mut gallery = gallery(3, 10);
        let (unit, path) = {
            let (unit, record) = gallery.visible().nth(1).unwrap();
            (unit, record.path.clone())
        };
        assert_eq!(gallery.toggle_unit(unit), Some(Membership::Selected));
        assert!(gallery.is_selected(&path));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut gallery = gallery(4, 10);
        gallery.toggle_selection("icons/icon0.svg").unwrap();
        gallery.set_query("icon 3");
        assert!(gallery.is_selected("icons/icon0.svg"));
        assert_eq!(gallery.cart_view().count, 1);
    }

    #[test]
    fn test_reload_drops_dangling_selection() {
        let mut gallery = gallery(4, 10);
        gallery.toggle_selection("icons/icon3.svg").unwrap();
        gallery.load_catalog(Catalog::from_entries(entries(2), "icons"));
        assert!(gallery.selection().is_empty());
    }

    #[test]
    fn test_tooltip_cleared_on_rebuild() {
        let mut gallery = gallery(3, 10);
        let unit = gallery.grid().units()[0].id;
        assert!(gallery.show_tooltip(unit, Rect::default()));
        assert_eq!(gallery.tooltip().map(|(_, r)| r.name.clone()), Some("Icon 0".to_string()));

        gallery.set_query("icon");
        assert!(gallery.tooltip().is_none());
        assert!(!gallery.show_tooltip(unit, Rect::default()));
    }

    #[test]
    fn test_invalid_config() {
        let config = GalleryConfig::default().with_page_size(0);
        assert!(Gallery::new(config).is_err());
    }

    #[test]
    fn test_default_matches_new_with_default_config() {
        let built = Gallery::new(GalleryConfig::default()).unwrap();
        let default = Gallery::default();
        assert_eq!(default.config(), built.config());
        assert_eq!(default.window().page_size(), built.window().page_size());
        assert_eq!(default.window().page_size(), 500);
    }
}
