//! Catalog generation from an icon directory listing.
//!
//! Pure helpers used by the `gallery import` command: key normalization,
//! source/tag extraction from relative paths, display-name lookup, and the
//! merge with an existing catalog that keeps `readonly` entries untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CatalogEntry;

/// Filename suffixes stripped from keys, applied in order, each at most once.
const KEY_SUFFIXES: &[&str] = &[
    r"(?i)_icon$",
    r"(?i)_glyph$",
    r"(?i)_line$",
    r"(?i)_color$",
    r"(?i)_black$",
    r"(?i)_rep$",
    r"(?i)_ns$",
    r"_1$",
    r"_2$",
];

static SUFFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEY_SUFFIXES
        .iter()
        .map(|pattern| Regex::new(pattern).expect("static suffix pattern"))
        .collect()
});

/// Derive a catalog key from a file name.
///
/// Drops the extension, turns spaces into underscores, strips the variant
/// suffixes (`_icon`, `_glyph`, `_line`, ...), removes apostrophes and
/// parentheses and lowercases the result.
pub fn normalize_key(filename: &str) -> String {
    let base = filename.rsplit('/').next().unwrap_or(filename);
    let stem = match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    };

    let mut key = stem.replace(' ', "_");
    for pattern in SUFFIX_PATTERNS.iter() {
        key = pattern.replace(&key, "").into_owned();
    }

    key.chars()
        .filter(|c| !matches!(c, '\'' | '(' | ')'))
        .collect::<String>()
        .to_lowercase()
}

/// First directory of a relative path, or `""` for top-level files.
pub fn source_from_path(path: &str) -> &str {
    match path.split_once('/') {
        Some((source, _)) => source,
        None => "",
    }
}

/// Directories between the source directory and the file name.
pub fn tags_from_path(path: &str) -> Vec<String> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() <= 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Human-readable name from a key: `red_fox` -> `Red Fox`.
pub fn title_case(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether a file participates in the import (visible SVG files only).
pub fn is_importable(file_name: &str) -> bool {
    !file_name.starts_with('.') && file_name.to_lowercase().ends_with(".svg")
}

/// Key to display-name table, read from `key;name` lines.
#[derive(Clone, Debug, Default)]
pub struct NameLookup {
    names: HashMap<String, String>,
}

impl NameLookup {
    /// Parses `key;name` lines. Blank and malformed lines are ignored.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .filter_map(|line| {
                let (key, name) = line.trim().split_once(';')?;
                let name = name.split(';').next().unwrap_or(name).trim();
                (!key.is_empty() && !name.is_empty()).then(|| (key.to_string(), name.to_string()))
            })
            .collect();
        Self { names }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Counts reported after an import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries written.
    pub total: usize,
    /// Entries generated from the directory listing.
    pub generated: usize,
    /// Readonly entries carried over from the previous catalog.
    pub preserved: usize,
}

/// Build a fresh entry for a relative asset path.
pub fn entry_for_path(path: &str, lookup: &NameLookup) -> CatalogEntry {
    let key = normalize_key(path);
    let name = lookup
        .get(&key)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(&key));

    CatalogEntry {
        filename: path.to_string(),
        key: Some(key),
        name: Some(name),
        source: Some(source_from_path(path).to_string()),
        style: None,
        tags: tags_from_path(path),
        readonly: false,
    }
}

/// Merge a directory listing with a previous catalog.
///
/// Paths whose previous entry is marked `readonly` keep that entry verbatim;
/// every other path is regenerated. The result is sorted by source, then key.
pub fn build_catalog(
    paths: &[String],
    existing: &[CatalogEntry],
    lookup: &NameLookup,
) -> (Vec<CatalogEntry>, ImportReport) {
    let readonly: HashMap<&str, &CatalogEntry> = existing
        .iter()
        .filter(|entry| entry.readonly)
        .map(|entry| (entry.filename.as_str(), entry))
        .collect();

    let mut report = ImportReport::default();
    let mut entries: Vec<CatalogEntry> = paths
        .iter()
        .map(|path| match readonly.get(path.as_str()) {
            Some(entry) => {
                report.preserved += 1;
                (*entry).clone()
            }
            None => {
                report.generated += 1;
                entry_for_path(path, lookup)
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        let a_key = (a.source.as_deref().unwrap_or(""), a.key.as_deref().unwrap_or(""));
        let b_key = (b.source.as_deref().unwrap_or(""), b.key.as_deref().unwrap_or(""));
        a_key.cmp(&b_key)
    });
    report.total = entries.len();

    (entries, report)
}
