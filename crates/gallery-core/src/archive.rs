//! Archive construction for the selected icons.
//!
//! Assets are fetched one at a time in selection order, named after their
//! record, de-duplicated and sanitized, then written into a deflated zip.
//! A failing asset is logged and skipped; the rest of the selection still
//! produces a valid archive.
//!
//! ## Entry naming
//!
//! - base name: the record's display name, else the file stem
//! - duplicates: first occurrence as-is, then `Name (2)`, `Name (3)`, ...
//! - the original file's extension is appended
//! - `< > : " / \ | ? *` are replaced with `_`

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::catalog::{Catalog, IconRecord};
use crate::console;
use crate::error::{ArchiveError, FetchError};
use crate::selection::SelectionSet;

/// Characters rejected by common filesystems.
pub const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Retrieves the bytes behind an asset path.
///
/// Implemented over the browser Fetch API in the web app, over the local
/// filesystem in the CLI, and in memory in tests.
#[allow(async_fn_in_trait)]
pub trait AssetFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

// =============================================================================
// Naming
// =============================================================================

/// Replace filesystem-illegal characters with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if ILLEGAL_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Extension of the last path segment, without the dot.
pub fn file_extension(path: &str) -> Option<&str> {
    let base = path.rsplit('/').next().unwrap_or(path);
    match base.rfind('.') {
        Some(0) | None => None,
        Some(dot) if dot + 1 < base.len() => Some(&base[dot + 1..]),
        Some(_) => None,
    }
}

/// Display name used as the entry's base name.
pub fn display_name(record: &IconRecord) -> &str {
    if record.name.trim().is_empty() {
        record.file_stem()
    } else {
        &record.name
    }
}

/// Hands out unique entry names within one archive.
///
/// Uniqueness holds for the final, sanitized name, so `A/B` and `A:B`
/// cannot both become `A_B.svg`.
#[derive(Debug, Default)]
pub struct EntryNamer {
    counters: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl EntryNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Final entry name for `base` with `extension`.
    pub fn name(&mut self, base: &str, extension: Option<&str>) -> String {
        let base = sanitize_filename(base);
        let extension = extension.map(sanitize_filename);
        let mut count = self.counters.get(&base).copied().unwrap_or(0);

        loop {
            count += 1;
            let stem = if count == 1 {
                base.clone()
            } else {
                format!("{} ({})", base, count)
            };
            let full = match &extension {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem,
            };
            if self.taken.insert(full.clone()) {
                self.counters.insert(base, count);
                return full;
            }
        }
    }
}

// =============================================================================
// Archive
// =============================================================================

/// Why a selected asset is missing from the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The path no longer resolves in the catalog.
    MissingRecord,
    /// The asset could not be fetched.
    Fetch(FetchError),
    /// The zip writer rejected the entry.
    Write(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedAsset {
    pub path: String,
    pub reason: SkipReason,
}

/// A finished archive.
#[derive(Clone, Debug)]
pub struct Archive {
    /// Zip file contents.
    pub bytes: Vec<u8>,
    /// Entry names in write order.
    pub entries: Vec<String>,
    pub skipped: Vec<SkippedAsset>,
}

impl Archive {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Incremental zip writer with entry naming.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    namer: EntryNamer,
    entries: Vec<String>,
    skipped: Vec<SkippedAsset>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
            namer: EntryNamer::new(),
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Write one asset. Returns the entry name used.
    pub fn add(&mut self, record: &IconRecord, bytes: &[u8]) -> Result<String, ArchiveError> {
        let name = self
            .namer
            .name(display_name(record), file_extension(&record.filename));

        self.writer.start_file(name.as_str(), self.options)?;
        self.writer.write_all(bytes)?;
        self.entries.push(name.clone());
        Ok(name)
    }

    pub fn skip(&mut self, path: &str, reason: SkipReason) {
        self.skipped.push(SkippedAsset {
            path: path.to_string(),
            reason,
        });
    }

    pub fn finish(self) -> Result<Archive, ArchiveError> {
        let cursor = self.writer.finish()?;
        Ok(Archive {
            bytes: cursor.into_inner(),
            entries: self.entries,
            skipped: self.skipped,
        })
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch every selected asset and pack it into a zip.
///
/// Items are processed sequentially in selection order, which fixes entry
/// naming regardless of network timing. Missing records, failed fetches and
/// rejected writes are logged and skipped. There is no cancellation once started.
pub async fn build_archive<F>(
    selection: &SelectionSet,
    catalog: &Catalog,
    fetcher: &F,
) -> Result<Archive, ArchiveError>
where
    F: AssetFetcher,
{
    let mut builder = ArchiveBuilder::new();

    for path in selection.iter() {
        let Some(record) = catalog.find(path) else {
            console::warn(&format!("Icon not found for path: {}", path));
            builder.skip(path, SkipReason::MissingRecord);
            continue;
        };

        match fetcher.fetch(&record.path).await {
            Ok(bytes) => {
                if let Err(e) = builder.add(record, &bytes) {
                    console::warn(&format!("Error writing {} to zip: {}", path, e));
                    builder.skip(path, SkipReason::Write(e.to_string()));
                }
            }
            Err(e) => {
                console::warn(&format!("Error adding {} to zip: {}", path, e));
                builder.skip(path, SkipReason::Fetch(e));
            }
        }
    }

    let archive = builder.finish()?;
    console::log(&format!(
        "Archive ready: {} entries, {} skipped",
        archive.entries.len(),
        archive.skipped.len()
    ));
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    struct MemoryFetcher {
        assets: HashMap<String, Vec<u8>>,
    }

    impl MemoryFetcher {
        fn new(assets: &[(&str, &[u8])]) -> Self {
            Self {
                assets: assets
                    .iter()
                    .map(|(path, bytes)| (path.to_string(), bytes.to_vec()))
                    .collect(),
            }
        }
    }

    impl AssetFetcher for MemoryFetcher {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
            self.assets.get(path).cloned().ok_or(FetchError::HttpError(404))
        }
    }

    fn read_entry(bytes: &[u8], name: &str) -> Vec<u8> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = Vec::new();
        file.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("A/B:C"), "A_B_C");
        assert_eq!(sanitize_filename(r#"<a>"b"\c|d?e*"#), "_a__b__c_d_e_");
        assert_eq!(sanitize_filename("Plain Name"), "Plain Name");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("icons/a/home.svg"), Some("svg"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".hidden"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_entry_namer_dedup() {
        let mut namer = EntryNamer::new();
        assert_eq!(namer.name("Home", Some("svg")), "Home.svg");
        assert_eq!(namer.name("Home", Some("svg")), "Home (2).svg");
        assert_eq!(namer.name("Owl", Some("svg")), "Owl.svg");
        assert_eq!(namer.name("Home", Some("png")), "Home (3).png");
        assert_eq!(namer.name("A/B:C", None), "A_B_C");
    }

    #[test]
    fn test_entry_namer_unique_after_sanitize() {
        let mut namer = EntryNamer::new();
        assert_eq!(namer.name("A/B", Some("svg")), "A_B.svg");
        assert_eq!(namer.name("A:B", Some("svg")), "A_B (2).svg");
        assert_eq!(namer.name("A_B", Some("svg")), "A_B (3).svg");
    }

    #[test]
    fn test_entry_namer_skips_literal_suffix() {
        let mut namer = EntryNamer::new();
        assert_eq!(namer.name("Home (2)", Some("svg")), "Home (2).svg");
        assert_eq!(namer.name("Home", Some("svg")), "Home.svg");
        assert_eq!(namer.name("Home", Some("svg")), "Home (3).svg");
        assert_eq!(namer.name("Home (2)", Some("svg")), "Home (2) (2).svg");
    }

    #[tokio::test]
    async fn test_build_archive_names_and_contents() {
        let catalog = Catalog::from_json(
            r#"[
                { "filename": "a/home.svg", "name": "Home" },
                { "filename": "b/home.svg", "name": "Home" }
            ]"#,
            "icons",
        )
        .unwrap();
        let mut selection = SelectionSet::new();
        selection.insert("icons/a/home.svg");
        selection.insert("icons/b/home.svg");
        let fetcher = MemoryFetcher::new(&[
            ("icons/a/home.svg", b"<svg>a</svg>"),
            ("icons/b/home.svg", b"<svg>b</svg>"),
        ]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert_eq!(archive.entries, vec!["Home.svg", "Home (2).svg"]);
        assert!(archive.skipped.is_empty());
        assert_eq!(read_entry(&archive.bytes, "Home.svg"), b"<svg>a</svg>");
        assert_eq!(read_entry(&archive.bytes, "Home (2).svg"), b"<svg>b</svg>");
    }

    #[tokio::test]
    async fn test_failed_fetch_is_skipped() {
        let catalog = Catalog::from_json(
            r#"[
                { "filename": "ok.svg", "name": "Ok" },
                { "filename": "broken.svg", "name": "Broken" }
            ]"#,
            "icons",
        )
        .unwrap();
        let mut selection = SelectionSet::new();
        selection.insert("icons/broken.svg");
        selection.insert("icons/ok.svg");
        let fetcher = MemoryFetcher::new(&[("icons/ok.svg", b"ok")]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert_eq!(archive.entries, vec!["Ok.svg"]);
        assert_eq!(
            archive.skipped,
            vec![SkippedAsset {
                path: "icons/broken.svg".to_string(),
                reason: SkipReason::Fetch(FetchError::HttpError(404)),
            }]
        );
        let zip = zip::ZipArchive::new(Cursor::new(archive.bytes.as_slice())).unwrap();
        assert_eq!(zip.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_record_is_skipped() {
        let catalog = Catalog::empty();
        let mut selection = SelectionSet::new();
        selection.insert("icons/gone.svg");
        let fetcher = MemoryFetcher::new(&[]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert!(archive.is_empty());
        assert_eq!(archive.skipped[0].reason, SkipReason::MissingRecord);
    }

    #[tokio::test]
    async fn test_illegal_characters_in_name() {
        let catalog =
            Catalog::from_json(r#"[ { "filename": "x.svg", "name": "A/B:C" } ]"#, "icons").unwrap();
        let mut selection = SelectionSet::new();
        selection.insert("icons/x.svg");
        let fetcher = MemoryFetcher::new(&[("icons/x.svg", b"x")]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert_eq!(archive.entries, vec!["A_B_C.svg"]);
    }

    #[tokio::test]
    async fn test_colliding_sanitized_names_keep_every_icon() {
        let catalog = Catalog::from_json(
            r#"[
                { "filename": "1.svg", "name": "A/B" },
                { "filename": "2.svg", "name": "A:B" },
                { "filename": "3.svg", "name": "Owl" }
            ]"#,
            "icons",
        )
        .unwrap();
        let mut selection = SelectionSet::new();
        for path in ["icons/1.svg", "icons/2.svg", "icons/3.svg"] {
            selection.insert(path);
        }
        let fetcher =
            MemoryFetcher::new(&[("icons/1.svg", b"1"), ("icons/2.svg", b"2"), ("icons/3.svg", b"3")]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert_eq!(archive.entries, vec!["A_B.svg", "A_B (2).svg", "Owl.svg"]);
        assert!(archive.skipped.is_empty());
        assert_eq!(read_entry(&archive.bytes, "A_B (2).svg"), b"2");
    }

    #[tokio::test]
    async fn test_literal_suffix_name_does_not_collide() {
        let catalog = Catalog::from_json(
            r#"[
                { "filename": "a.svg", "name": "Home (2)" },
                { "filename": "b.svg", "name": "Home" },
                { "filename": "c.svg", "name": "Home" }
            ]"#,
            "icons",
        )
        .unwrap();
        let mut selection = SelectionSet::new();
        for path in ["icons/a.svg", "icons/b.svg", "icons/c.svg"] {
            selection.insert(path);
        }
        let fetcher =
            MemoryFetcher::new(&[("icons/a.svg", b"a"), ("icons/b.svg", b"b"), ("icons/c.svg", b"c")]);

        let archive = build_archive(&selection, &catalog, &fetcher).await.unwrap();
        assert_eq!(archive.entries, vec!["Home (2).svg", "Home.svg", "Home (3).svg"]);
        let zip = zip::ZipArchive::new(Cursor::new(archive.bytes.as_slice())).unwrap();
        assert_eq!(zip.len(), 3);
        assert_eq!(read_entry(&archive.bytes, "Home (3).svg"), b"c");
    }

    #[test]
    fn test_rejected_write_is_reported() {
        let record = Catalog::from_json(r#"[ { "filename": "x.svg", "name": "X" } ]"#, "icons")
            .unwrap()
            .find("icons/x.svg")
            .cloned()
            .unwrap();
        let mut builder = ArchiveBuilder::new();
        builder.add(&record, b"x").unwrap();
        builder.writer.start_file("X (2).svg", builder.options).unwrap();

        assert!(builder.add(&record, b"x").is_err());
        let archive = builder.finish().unwrap();
        assert_eq!(archive.entries, vec!["X.svg"]);
    }
}
