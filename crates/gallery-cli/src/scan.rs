//! Icon directory walking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Every file under `root`, as sorted `/`-separated paths relative to it.
pub fn list_files(root: &Path) -> Result<Vec<String>, CliError> {
    if !root.is_dir() {
        return Err(CliError::MissingDirectory(root.to_path_buf()));
    }
    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<(), CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CliError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(root, &path, out)?;
        } else if let Some(relative) = relative_path(root, &path) {
            out.push(relative);
        }
    }
    Ok(())
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Outcome of a dotfile rename pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<PathBuf>,
    /// Dotfiles left alone because the undotted name already exists.
    pub conflicts: Vec<PathBuf>,
}

/// Strip the leading dot from SVG files so static hosts serve them.
pub fn rename_dotfiles(root: &Path) -> Result<RenameReport, CliError> {
    let mut report = RenameReport::default();
    for relative in list_files(root)? {
        let path = root.join(&relative);
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.starts_with('.') || !file_name.to_lowercase().ends_with(".svg") {
            continue;
        }

        let target = path.with_file_name(&file_name[1..]);
        if target.exists() {
            report.conflicts.push(path);
            continue;
        }
        fs::rename(&path, &target).map_err(|e| CliError::io(&path, e))?;
        report.renamed.push(target);
    }
    Ok(report)
}
