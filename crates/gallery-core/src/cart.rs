//! Selection store (cart).
//!
//! Each path is either selected or not. Cards toggle membership in both
//! directions; cart entries can only remove. After every transition the
//! derived [`CartView`] is recomputed from membership alone, and the panel
//! is forced closed once the selection becomes empty.

use crate::catalog::Catalog;
use crate::selection::SelectionSet;

/// Membership of a path after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    Selected,
    Unselected,
}

/// One row of the cart panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub path: String,
    pub name: String,
}

/// Everything the cart controls render, derived from the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartView {
    /// Entries resolvable in the catalog, in selection order.
    pub items: Vec<CartItem>,
    /// Badge value: selection cardinality.
    pub count: usize,
    /// Cart-opening control enabled.
    pub cart_enabled: bool,
    /// Download control enabled.
    pub download_enabled: bool,
    pub panel_open: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    selection: SelectionSet,
    panel_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a path's membership (card click).
    pub fn toggle(&mut self, path: &str) -> Membership {
        let membership = if self.selection.remove(path) {
            Membership::Unselected
        } else {
            self.selection.insert(path);
            Membership::Selected
        };
        self.close_if_empty();
        membership
    }

    /// Remove a path (cart entry button). Selected -> unselected only.
    pub fn remove(&mut self, path: &str) -> bool {
        let removed = self.selection.remove(path);
        self.close_if_empty();
        removed
    }

    /// Drop selections that no longer resolve in `catalog`.
    pub fn retain_known(&mut self, catalog: &Catalog) -> usize {
        let dropped = self.selection.retain(|path| catalog.contains(path));
        self.close_if_empty();
        dropped
    }

    fn close_if_empty(&mut self) {
        if self.selection.is_empty() {
            self.panel_open = false;
        }
    }

    /// Open the panel. Refused while the cart is empty.
    pub fn open_panel(&mut self) -> bool {
        self.panel_open = !self.selection.is_empty();
        self.panel_open
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn toggle_panel(&mut self) -> bool {
        if self.panel_open {
            self.close_panel();
            false
        } else {
            self.open_panel()
        }
    }

    #[inline]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    #[inline]
    pub fn is_selected(&self, path: &str) -> bool {
        self.selection.contains(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Rebuild the cart view. Paths missing from the catalog are skipped.
    pub fn view(&self, catalog: &Catalog) -> CartView {
        let items = self
            .selection
            .iter()
            .filter_map(|path| {
                catalog.find(path).map(|record| CartItem {
                    path: record.path.clone(),
                    name: record.name.clone(),
                })
            })
            .collect();
        let count = self.selection.len();

        CartView {
            items,
            count,
            cart_enabled: count > 0,
            download_enabled: count > 0,
            panel_open: self.panel_open,
        }
    }
}
