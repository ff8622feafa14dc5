//! Markdown file discovery.

use crate::error::{Result, TaskdocError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `*.md` file under `root`, recursively, sorted by path.
///
/// Anything under `exclude` (typically the output root) is skipped so a run
/// never re-reads its own output.
pub fn markdown_files(root: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| exclude.is_none_or(|ex| !entry.path().starts_with(ex)));

    for entry in walker {
        let entry = entry.map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to read directory '{}': {}",
                root.display(),
                e
            ))
        })?;

        let is_markdown = entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("md");
        if is_markdown {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
