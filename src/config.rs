//! Application configuration.
//!
//! Centralizes the constants the browser app needs on top of the pipeline
//! defaults in [`GalleryConfig`].

use gallery_core::{FacetKind, GalleryConfig};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Icon Gallery";

// =============================================================================
// Network Configuration
// =============================================================================

/// Catalog document, relative to the page.
pub const CATALOG_URL: &str = "icons.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Gallery Configuration
// =============================================================================

/// Attribute the facet dropdown filters on.
pub const FACET_KIND: FacetKind = FacetKind::Source;

/// Pipeline configuration for this deployment.
pub fn gallery_config() -> GalleryConfig {
    GalleryConfig::default().with_facet(FACET_KIND)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_config_is_valid() {
        let config = gallery_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.facet, FACET_KIND);
        assert_eq!(config.page_size, 500);
        assert_eq!(config.archive_name, "selected-icons.zip");
    }
}
