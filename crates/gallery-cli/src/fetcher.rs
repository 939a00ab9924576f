use std::path::PathBuf;

use gallery_core::{AssetFetcher, FetchError};

/// Reads assets from a directory on disk.
///
/// Catalog paths already carry the asset directory prefix, so they are
/// resolved against the site root that contains it.
#[derive(Clone, Debug)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|e| FetchError::Io(format!("{}: {}", full.display(), e)))
    }
}
