use std::fs;

use camino::Utf8Path;

use crate::bibtex::BibEntry;
use crate::error::BibError;

/// Joins rendered entries so that consecutive entries are separated by one
/// blank line. No entries yields an empty string.
pub fn render_bibliography(entries: &[BibEntry]) -> String {
    entries
        .iter()
        .map(BibEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrites `path` with `contents`, creating missing parent directories.
pub fn write_bibliography(path: &Utf8Path, contents: &str) -> Result<(), BibError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs::create_dir_all(parent.as_std_path())
            .map_err(|err| BibError::Filesystem(format!("create {parent}: {err}")))?;
    }
    fs::write(path.as_std_path(), contents)
        .map_err(|err| BibError::Filesystem(format!("write {path}: {err}")))
}
