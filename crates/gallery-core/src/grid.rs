//! Rendered grid model.
//!
//! Tracks which records are materialized as cards and gives every card a
//! [`UnitId`]. The id is the render key: a rebuild hands out fresh ids so
//! every card is re-created, an append keeps existing ids so only the newly
//! revealed slice is created. The id → record side table replaces any need
//! to stash record data on presentation nodes.

use std::collections::HashMap;

/// Identity of a rendered card. Never reused within a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A rendered card: its id and the catalog index it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridUnit {
    pub id: UnitId,
    pub record: usize,
}

/// What the last grid operation did to the render tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridChange {
    /// Tree cleared and repopulated with `len` cards.
    Rebuilt { len: usize },
    /// Cards `start..end` appended; earlier cards untouched.
    Appended { start: usize, end: usize },
    /// Nothing to do.
    Unchanged,
}

#[derive(Clone, Debug, Default)]
pub struct Grid {
    units: Vec<GridUnit>,
    by_id: HashMap<UnitId, usize>,
    next_id: u64,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every card and render `visible` from scratch.
    pub fn rebuild(&mut self, visible: &[usize]) -> GridChange {
        self.units.clear();
        self.by_id.clear();
        for &record in visible {
            self.push(record);
        }
        GridChange::Rebuilt { len: self.units.len() }
    }

    /// Grow the grid to show `visible`, which must extend the current
    /// prefix. Only the cards past the current length are created.
    pub fn append(&mut self, visible: &[usize]) -> GridChange {
        let start = self.units.len();
        if visible.len() <= start {
            return GridChange::Unchanged;
        }
        for &record in &visible[start..] {
            self.push(record);
        }
        GridChange::Appended {
            start,
            end: self.units.len(),
        }
    }

    fn push(&mut self, record: usize) {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.by_id.insert(id, record);
        self.units.push(GridUnit { id, record });
    }

    /// Catalog index shown by a card, if that card is still rendered.
    pub fn record_of(&self, id: UnitId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    #[inline]
    pub fn units(&self) -> &[GridUnit] {
        &self.units
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_existing_ids() {
        let mut grid = Grid::new();
        grid.rebuild(&[0, 1, 2]);
        let before: Vec<UnitId> = grid.units().iter().map(|u| u.id).collect();

        assert_eq!(
            grid.append(&[0, 1, 2, 3, 4]),
            GridChange::Appended { start: 3, end: 5 }
        );
        let after: Vec<UnitId> = grid.units().iter().map(|u| u.id).collect();
        assert_eq!(&after[..3], &before[..]);
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn test_rebuild_issues_fresh_ids() {
        let mut grid = Grid::new();
        grid.rebuild(&[0, 1]);
        let old = grid.units()[0].id;

        assert_eq!(grid.rebuild(&[0, 1]), GridChange::Rebuilt { len: 2 });
        assert_ne!(grid.units()[0].id, old);
        assert_eq!(grid.record_of(old), None);
    }

    #[test]
    fn test_side_table_lookup() {
        let mut grid = Grid::new();
        grid.rebuild(&[7, 3]);
        let second = grid.units()[1].id;
        assert_eq!(grid.record_of(second), Some(3));
    }

    #[test]
    fn test_append_without_growth() {
        let mut grid = Grid::new();
        grid.rebuild(&[0, 1]);
        assert_eq!(grid.append(&[0, 1]), GridChange::Unchanged);
    }
}
