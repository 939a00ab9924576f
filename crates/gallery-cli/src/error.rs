use std::path::PathBuf;

use gallery_core::{ArchiveError, CatalogError, GalleryError};
use thiserror::Error;

/// Errors surfaced by the `gallery` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
