//! Icon catalog model and loading.
//!
//! The catalog document is either a bare JSON array of entries or an object
//! wrapping them under `icons`. Each entry becomes an immutable
//! [`IconRecord`] whose `path` joins the asset directory with the entry's
//! filename; the path is the identifier used by selection and archiving.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::import::{normalize_key, title_case};

// =============================================================================
// Wire Types
// =============================================================================

/// One entry as stored in `icons.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Asset file path relative to the asset directory.
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form search terms (`keywords` is accepted as an alias).
    #[serde(
        default,
        alias = "keywords",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Importer hint: keep this entry verbatim on regeneration.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of the catalog document.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    /// `[ {...}, ... ]`
    Bare(Vec<CatalogEntry>),
    /// `{ "icons": [ {...}, ... ] }`
    Wrapped { icons: Vec<CatalogEntry> },
}

impl CatalogDocument {
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            Self::Bare(entries) | Self::Wrapped { icons: entries } => entries,
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A loaded icon. Immutable once the catalog is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconRecord {
    pub key: String,
    pub name: String,
    pub filename: String,
    /// `<asset_dir>/<filename>`; unique within a catalog.
    pub path: String,
    pub source: String,
    pub style: String,
    pub tags: Vec<String>,
    /// Lowercased copies of the searchable fields, computed once at load.
    pub(crate) folded: FoldedFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FoldedFields {
    pub(crate) name: String,
    pub(crate) key: String,
    pub(crate) tags: Vec<String>,
}

impl IconRecord {
    /// Build a record from a wire entry.
    ///
    /// A missing key is derived from the filename; a missing or blank name
    /// falls back to the title-cased key.
    pub fn from_entry(entry: CatalogEntry, asset_dir: &str) -> Self {
        let key = entry
            .key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| normalize_key(&entry.filename));
        let name = entry
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| title_case(&key));
        let path = asset_path(asset_dir, &entry.filename);

        let folded = FoldedFields {
            name: name.to_lowercase(),
            key: key.to_lowercase(),
            tags: entry.tags.iter().map(|t| t.to_lowercase()).collect(),
        };

        Self {
            key,
            name,
            path,
            filename: entry.filename,
            source: entry.source.unwrap_or_default(),
            style: entry.style.unwrap_or_default(),
            tags: entry.tags,
            folded,
        }
    }

    /// File name stem (last path segment without extension).
    pub fn file_stem(&self) -> &str {
        let base = self.filename.rsplit('/').next().unwrap_or(&self.filename);
        match base.rfind('.') {
            Some(0) | None => base,
            Some(dot) => &base[..dot],
        }
    }
}

/// Join the asset directory and a filename with a single `/`.
pub fn asset_path(asset_dir: &str, filename: &str) -> String {
    let dir = asset_dir.trim_end_matches('/');
    let file = filename.trim_start_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full, ordered set of records plus a path lookup table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<IconRecord>,
    by_path: HashMap<String, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog document (bare array or `{ icons: [...] }`).
    pub fn from_json(json: &str, asset_dir: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_entries(document.into_entries(), asset_dir))
    }

    /// Build from wire entries, preserving order.
    ///
    /// When two entries resolve to the same path only the first is kept.
    pub fn from_entries(entries: Vec<CatalogEntry>, asset_dir: &str) -> Self {
        let mut records = Vec::with_capacity(entries.len());
        let mut by_path = HashMap::with_capacity(entries.len());

        for entry in entries {
            let record = IconRecord::from_entry(entry, asset_dir);
            if by_path.contains_key(&record.path) {
                continue;
            }
            by_path.insert(record.path.clone(), records.len());
            records.push(record);
        }

        Self { records, by_path }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&IconRecord> {
        self.records.get(index)
    }

    pub fn index_of(&self, path: &str) -> Option<usize> {
        self.by_path.get(path).copied()
    }

    pub fn find(&self, path: &str) -> Option<&IconRecord> {
        self.index_of(path).and_then(|i| self.records.get(i))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Every record index, in catalog order.
    pub fn all_indices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.records.len()
    }
}
