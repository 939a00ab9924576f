//! Insertion-ordered set of selected icon paths.

use std::collections::HashSet;

/// Selected icon paths, unique, iterated in the order they were added.
///
/// Iteration order drives archive entry naming, so it is kept stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns `false` if it was already selected.
    pub fn insert(&mut self, path: &str) -> bool {
        if !self.members.insert(path.to_string()) {
            return false;
        }
        self.order.push(path.to_string());
        true
    }

    /// Remove a path. Returns `false` if it was not selected.
    pub fn remove(&mut self, path: &str) -> bool {
        if !self.members.remove(path) {
            return false;
        }
        self.order.retain(|p| p != path);
        true
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.members.contains(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Keep only paths satisfying `keep`. Returns how many were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.order.len();
        self.order.retain(|p| keep(p));
        self.members = self.order.iter().cloned().collect();
        before - self.order.len()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}
