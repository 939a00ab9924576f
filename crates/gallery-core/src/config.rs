//! Gallery configuration.
//!
//! Centralizes the tunables of the pipeline. Every field has a default so a
//! host can deserialize a partial JSON object and only override what it needs.

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::facet::FacetKind;

/// Asset directory prefix joined with each entry's filename.
pub const DEFAULT_ASSET_DIR: &str = "icons";

/// Number of cards materialized per page.
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// Shortest non-empty query that triggers a search.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Search input debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Filename of the downloaded archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "selected-icons.zip";

/// Pipeline configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory prefix for asset paths (no trailing slash).
    pub asset_dir: String,
    /// Display window page size.
    pub page_size: usize,
    /// Minimum length of a non-empty query.
    pub min_query_len: usize,
    /// Debounce window for query edits.
    pub debounce_ms: u32,
    /// Which record attribute the facet control filters on.
    pub facet: FacetKind,
    /// Download filename of the produced archive.
    pub archive_name: String,
}

impl GalleryConfig {
    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig("page_size must be greater than 0"));
        }
        if self.archive_name.trim().is_empty() {
            return Err(GalleryError::InvalidConfig("archive_name must not be empty"));
        }
        Ok(())
    }

    /// Builder-style override of the facet kind.
    pub fn with_facet(mut self, facet: FacetKind) -> Self {
        self.facet = facet;
        self
    }

    /// Builder-style override of the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builder-style override of the asset directory.
    pub fn with_asset_dir(mut self, asset_dir: impl Into<String>) -> Self {
        self.asset_dir = asset_dir.into();
        self
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            facet: FacetKind::default(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.page_size, 500);
        assert_eq!(config.min_query_len, 2);
        assert_eq!(config.archive_name, "selected-icons.zip");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{ "page_size": 50, "facet": "style" }"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.facet, FacetKind::Style);
        assert_eq!(config.asset_dir, "icons");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = GalleryConfig::default().with_page_size(0);
        assert!(matches!(
            config.validate(),
            Err(GalleryError::InvalidConfig(_))
        ));
    }
}
