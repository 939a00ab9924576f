//! Display window over the filtered results.
//!
//! The window is a cursor bounding how many filtered results are
//! materialized. A new search or facet change resets it to one page;
//! "load more" advances it by a page and "load all" opens it to the full
//! filtered length.

/// Cursor bounding the rendered prefix of the filtered results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayWindow {
    count: usize,
    page_size: usize,
}

impl DisplayWindow {
    /// A window showing one page.
    pub fn new(page_size: usize) -> Self {
        Self {
            count: page_size,
            page_size,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to a single page.
    pub fn reset(&mut self) {
        self.count = self.page_size;
    }

    /// Advance by one page.
    pub fn load_more(&mut self) {
        self.count = self.count.saturating_add(self.page_size);
    }

    /// Open the window to the full filtered length.
    ///
    /// Never shrinks a window that is already larger.
    pub fn load_all(&mut self, total: usize) {
        self.count = self.count.max(total);
    }

    /// Number of results rendered for a filtered set of `total`.
    #[inline]
    pub fn visible_len(&self, total: usize) -> usize {
        self.count.min(total)
    }

    #[inline]
    pub fn has_more(&self, total: usize) -> bool {
        total > self.count
    }

    /// Results hidden beyond the window.
    #[inline]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.count)
    }

    /// How many results one "load more" would reveal.
    #[inline]
    pub fn next_page_len(&self, total: usize) -> usize {
        self.remaining(total).min(self.page_size)
    }
}

/// The two pager actions offered when results exceed the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerActions {
    /// Results revealed by "load more".
    pub more: usize,
    /// Results revealed by "load all".
    pub remaining: usize,
}

impl PagerActions {
    /// Pager state for a window and filtered length, `None` when everything
    /// is already shown.
    pub fn for_window(window: &DisplayWindow, total: usize) -> Option<Self> {
        window.has_more(total).then(|| Self {
            more: window.next_page_len(total),
            remaining: window.remaining(total),
        })
    }

    pub fn load_more_label(&self) -> String {
        format!("Load More ({} more)", self.more)
    }

    pub fn load_all_label(&self) -> String {
        format!("Load All ({} remaining)", self.remaining)
    }
}

/// Figures for the "N of M results" indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultsSummary {
    /// Cards currently rendered.
    pub shown: usize,
    /// Results after search and facet filtering.
    pub matched: usize,
    /// Records in the catalog.
    pub total: usize,
}

impl ResultsSummary {
    /// Search field placeholder: counts only appear while a query is active.
    pub fn placeholder(&self, query_active: bool) -> String {
        if query_active {
            format!("Search icons... ({} of {} results)", self.matched, self.total)
        } else {
            "Search icons...".to_string()
        }
    }

    /// Grid footer text.
    pub fn label(&self) -> String {
        if self.shown < self.matched {
            format!("Showing {} of {} results", self.shown, self.matched)
        } else {
            format!("{} of {} icons", self.matched, self.total)
        }
    }
}
