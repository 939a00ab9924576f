//! Facet filtering (source or style) and the combined filter pipeline.
//!
//! A record passes the pipeline only if it matches the search query and its
//! facet value is one of the checked facet values. Both stages are plain
//! order-preserving filters over record indices, so they commute.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, IconRecord};
use crate::search;

/// Which record attribute the facet control filters on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    /// Origin collection of the icon (default)
    #[default]
    Source,
    /// Visual style variant
    Style,
}

impl FacetKind {
    /// The record's value for this facet. Missing values are `""`.
    pub fn value_of<'a>(&self, record: &'a IconRecord) -> &'a str {
        match self {
            Self::Source => &record.source,
            Self::Style => &record.style,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Style => "Style",
        }
    }
}

impl std::str::FromStr for FacetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "style" => Ok(Self::Style),
            other => Err(format!("unknown facet '{}': expected source or style", other)),
        }
    }
}

/// A distinct facet value and how many records carry it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

/// Distinct facet values in the catalog, sorted by value.
pub fn facet_values(catalog: &Catalog, kind: FacetKind) -> Vec<FacetValue> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in catalog.records() {
        *counts.entry(kind.value_of(record)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            value: value.to_string(),
            count,
        })
        .collect()
}

// =============================================================================
// FacetSelection
// =============================================================================

/// The set of currently checked facet values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetSelection {
    checked: BTreeSet<String>,
}

impl FacetSelection {
    /// Nothing checked: the pipeline passes no records.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every value present in the catalog checked.
    pub fn all_of(catalog: &Catalog, kind: FacetKind) -> Self {
        Self {
            checked: catalog
                .records()
                .iter()
                .map(|r| kind.value_of(r).to_string())
                .collect(),
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            checked: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.checked.contains(value)
    }

    /// Flip a value. Returns whether it is checked afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.checked.remove(value) {
            false
        } else {
            self.checked.insert(value.to_string());
            true
        }
    }

    pub fn set(&mut self, value: &str, checked: bool) {
        if checked {
            self.checked.insert(value.to_string());
        } else {
            self.checked.remove(value);
        }
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.checked.iter().map(String::as_str)
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Keep candidates whose facet value is checked, preserving order.
pub fn filter_by_facet<I>(
    catalog: &Catalog,
    candidates: I,
    kind: FacetKind,
    selection: &FacetSelection,
) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    candidates
        .into_iter()
        .filter(|&i| {
            catalog
                .get(i)
                .is_some_and(|record| selection.contains(kind.value_of(record)))
        })
        .collect()
}

/// Full recompute of the filtered view: search, then facet filter.
pub fn apply(
    catalog: &Catalog,
    query: &str,
    kind: FacetKind,
    selection: &FacetSelection,
) -> Vec<usize> {
    let searched = search::search(catalog, catalog.all_indices(), query);
    filter_by_facet(catalog, searched, kind, selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                { "filename": "a.svg", "name": "Alpha", "source": "phylopic", "style": "line" },
                { "filename": "b.svg", "name": "Beta", "source": "bioicons", "style": "solid" },
                { "filename": "c.svg", "name": "Gamma", "source": "phylopic" },
                { "filename": "d.svg", "name": "Delta" }
            ]"#,
            "icons",
        )
        .unwrap()
    }

    #[test]
    fn test_facet_values_sorted_with_counts() {
        let values = facet_values(&catalog(), FacetKind::Source);
        let pairs: Vec<(&str, usize)> = values.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(pairs, vec![("", 1), ("bioicons", 1), ("phylopic", 2)]);
    }

    #[test]
    fn test_all_of_passes_everything() {
        let catalog = catalog();
        let selection = FacetSelection::all_of(&catalog, FacetKind::Source);
        assert_eq!(apply(&catalog, "", FacetKind::Source, &selection), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unchecked_value_is_excluded() {
        let catalog = catalog();
        let mut selection = FacetSelection::all_of(&catalog, FacetKind::Source);
        assert!(!selection.toggle("phylopic"));
        assert_eq!(apply(&catalog, "", FacetKind::Source, &selection), vec![1, 3]);
        assert!(selection.toggle("phylopic"));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_style_facet() {
        let catalog = catalog();
        let selection = FacetSelection::from_values(["line"]);
        assert_eq!(apply(&catalog, "", FacetKind::Style, &selection), vec![0]);
    }

    #[test]
    fn test_nothing_checked_passes_nothing() {
        let catalog = catalog();
        assert!(apply(&catalog, "", FacetKind::Source, &FacetSelection::none()).is_empty());
    }

    #[test]
    fn test_search_and_facet_combined() {
        let catalog = catalog();
        let selection = FacetSelection::from_values(["phylopic"]);
        assert_eq!(apply(&catalog, "a", FacetKind::Source, &selection), vec![0, 2]);
        assert_eq!(apply(&catalog, "gam", FacetKind::Source, &selection), vec![2]);
    }

    #[test]
    fn test_facet_kind_from_str() {
        assert_eq!("Source".parse::<FacetKind>(), Ok(FacetKind::Source));
        assert_eq!("style".parse::<FacetKind>(), Ok(FacetKind::Style));
        assert!("size".parse::<FacetKind>().is_err());
    }
}
