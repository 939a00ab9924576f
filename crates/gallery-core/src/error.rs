//! Error types for the gallery pipeline.
//!
//! Each domain gets its own enum:
//!
//! - [`CatalogError`] - catalog document parsing
//! - [`FetchError`] - network/asset retrieval, shared by every [`AssetFetcher`]
//! - [`ArchiveError`] - zip construction
//! - [`GalleryError`] - coordinator operations and configuration
//!
//! [`AssetFetcher`]: crate::archive::AssetFetcher

use thiserror::Error;

/// Catalog parsing errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Network/fetch-related errors for catalog and asset requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, missing file, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// Local asset could not be read
    #[error("Read error: {0}")]
    Io(String),
}

/// Archive construction errors.
///
/// Per-asset fetch failures are not errors at this level; they are recorded
/// as skipped entries on the produced archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The zip writer rejected an entry or failed to finalize.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Writing entry bytes failed.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coordinator and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Selection referenced a path that is not in the catalog.
    #[error("unknown icon: {0}")]
    UnknownIcon(String),
    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
