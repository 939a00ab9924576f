//! `gallery` command: catalog maintenance and offline packing for the icon
//! gallery.
//!
//! - `import` - regenerate `icons.json` from an icon directory
//! - `scan` - list every file as a bare `{ filename }` entry
//! - `search` - run the gallery filter pipeline against a catalog
//! - `pack` - build the same zip the browser download produces

pub mod error;
pub mod fetcher;
pub mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gallery_core::facet;
use gallery_core::import::{self, NameLookup};
use gallery_core::{
    Catalog, CatalogDocument, CatalogEntry, FacetKind, FacetSelection, GalleryConfig,
    SelectionSet, build_archive,
};
use serde::Serialize;

pub use error::CliError;
pub use fetcher::FsFetcher;

#[derive(Debug, Parser)]
#[command(name = "gallery", version, about = "Icon gallery catalog tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the catalog from an icon directory, keeping readonly entries.
    Import {
        #[arg(long, default_value = "icons")]
        icons_dir: PathBuf,
        #[arg(long, short, default_value = "icons.json")]
        output: PathBuf,
        /// `key;name` file with display names.
        #[arg(long)]
        names: Option<PathBuf>,
        /// Strip leading dots from SVG files before importing.
        #[arg(long)]
        rename_dotfiles: bool,
    },
    /// Write a bare filename listing of the icon directory.
    Scan {
        #[arg(long, default_value = "icons")]
        icons_dir: PathBuf,
        #[arg(long, short, default_value = "scan_icons.json")]
        output: PathBuf,
    },
    /// Print the records the gallery would show for a query.
    Search {
        #[command(flatten)]
        filter: FilterArgs,
        /// Maximum number of rows to print.
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Pack icons into a zip archive.
    Pack {
        #[command(flatten)]
        filter: FilterArgs,
        /// Directory that asset paths are resolved against.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Asset path to select; repeatable. Defaults to every filtered record.
        #[arg(long = "path")]
        paths: Vec<String>,
        #[arg(long, short, default_value = gallery_core::config::DEFAULT_ARCHIVE_NAME)]
        output: PathBuf,
    },
}

/// Catalog location and the filter pipeline inputs.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = "icons.json")]
    pub catalog: PathBuf,
    #[arg(long, default_value = gallery_core::config::DEFAULT_ASSET_DIR)]
    pub asset_dir: String,
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "source")]
    pub facet: FacetKind,
    /// Facet values to keep; repeatable. Defaults to all values.
    #[arg(long = "only")]
    pub only: Vec<String>,
}

impl FilterArgs {
    fn load(&self) -> Result<Catalog, CliError> {
        let config = GalleryConfig::default()
            .with_asset_dir(self.asset_dir.clone())
            .with_facet(self.facet);
        config.validate()?;
        let json = fs::read_to_string(&self.catalog).map_err(|e| CliError::io(&self.catalog, e))?;
        Catalog::from_json(&json, &config.asset_dir).map_err(|source| CliError::Catalog {
            path: self.catalog.clone(),
            source,
        })
    }

    fn apply(&self, catalog: &Catalog) -> Vec<usize> {
        let selection = if self.only.is_empty() {
            FacetSelection::all_of(catalog, self.facet)
        } else {
            FacetSelection::from_values(self.only.iter().map(String::as_str))
        };
        facet::apply(catalog, &self.query, self.facet, &selection)
    }
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Import {
            icons_dir,
            output,
            names,
            rename_dotfiles,
        } => {
            if rename_dotfiles {
                let report = scan::rename_dotfiles(&icons_dir)?;
                for path in &report.conflicts {
                    eprintln!("warning: skipped rename, target exists: {}", path.display());
                }
                println!("Renamed {} dotfiles", report.renamed.len());
            }
            let report = import_catalog(&icons_dir, &output, names.as_deref())?;
            println!(
                "Wrote {} entries to {} ({} generated, {} readonly preserved)",
                report.total,
                output.display(),
                report.generated,
                report.preserved
            );
        }
        Command::Scan { icons_dir, output } => {
            let count = scan_catalog(&icons_dir, &output)?;
            println!("Wrote {} filenames to {}", count, output.display());
        }
        Command::Search { filter, limit } => {
            let catalog = filter.load()?;
            let matched = filter.apply(&catalog);
            for record in matched.iter().take(limit).filter_map(|&i| catalog.get(i)) {
                let value = filter.facet.value_of(record);
                println!("{}\t{}\t{}", record.path, record.name, value);
            }
            println!("{} of {} results", matched.len().min(limit), matched.len());
        }
        Command::Pack {
            filter,
            root,
            paths,
            output,
        } => {
            let catalog = filter.load()?;
            let mut selection = SelectionSet::new();
            if paths.is_empty() {
                for record in filter.apply(&catalog).iter().filter_map(|&i| catalog.get(i)) {
                    selection.insert(&record.path);
                }
            } else {
                for path in &paths {
                    selection.insert(path);
                }
            }

            let archive = build_archive(&selection, &catalog, &FsFetcher::new(root)).await?;
            for skipped in &archive.skipped {
                eprintln!("warning: skipped {}: {:?}", skipped.path, skipped.reason);
            }
            fs::write(&output, &archive.bytes).map_err(|e| CliError::io(&output, e))?;
            println!(
                "Packed {} icons into {}",
                archive.entries.len(),
                output.display()
            );
        }
    }
    Ok(())
}

/// Regenerate `output` from the SVGs under `icons_dir`.
///
/// An existing catalog at `output` supplies the readonly entries to keep.
pub fn import_catalog(
    icons_dir: &Path,
    output: &Path,
    names: Option<&Path>,
) -> Result<import::ImportReport, CliError> {
    let paths = importable_paths(icons_dir)?;

    let existing = if output.exists() {
        read_entries(output)?
    } else {
        Vec::new()
    };

    let lookup = match names {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            NameLookup::parse(&text)
        }
        None => NameLookup::default(),
    };

    let (entries, report) = import::build_catalog(&paths, &existing, &lookup);
    write_json(output, &entries)?;
    Ok(report)
}

#[derive(Serialize)]
struct ScanEntry<'a> {
    filename: &'a str,
}

/// Write a `[{ "filename": ... }]` listing of every file under `icons_dir`.
/// Returns the entry count.
pub fn scan_catalog(icons_dir: &Path, output: &Path) -> Result<usize, CliError> {
    let paths = scan::list_files(icons_dir)?;
    let entries: Vec<ScanEntry<'_>> = paths.iter().map(|p| ScanEntry { filename: p }).collect();
    write_json(output, &entries)?;
    Ok(entries.len())
}

fn importable_paths(icons_dir: &Path) -> Result<Vec<String>, CliError> {
    Ok(scan::list_files(icons_dir)?
        .into_iter()
        .filter(|path| {
            let file_name = path.rsplit('/').next().unwrap_or(path);
            import::is_importable(file_name)
        })
        .collect())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| CliError::io(path, e))
}

/// Parse a previously written catalog file.
pub fn read_entries(path: &Path) -> Result<Vec<CatalogEntry>, CliError> {
    let json = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str::<CatalogDocument>(&json)
        .map(CatalogDocument::into_entries)
        .map_err(|e| CliError::Catalog {
            path: path.to_path_buf(),
            source: e.into(),
        })
}
