//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuDownload as Download, LuLoader as Spinner,
        LuSearch as Search, LuShoppingCart as Cart, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsCart3 as Cart, BsChevronDown as ChevronDown,
        BsDownload as Download, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SEARCH, Search);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CART, Cart);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CLOSE, Close);
themed_icon!(SPINNER, Spinner);
