use crate::error::AppError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the direct children of `directory`, sorted by file name.
///
/// Nothing is filtered: subdirectories and non-image files are returned too
/// and left to fail metadata extraction on their own.
pub fn list_entries(directory: &Path) -> Result<Vec<PathBuf>, AppError> {
    log::info!("Starting file discovery in {}", directory.display());

    if !directory.exists() {
        return Err(AppError::DirectoryNotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(AppError::Generic(format!("{} is not a directory", directory.display())));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        log::trace!("Discovered entry: {:?}", entry.path());
        entries.push(entry.into_path());
    }

    log::info!("File discovery complete, {} entries found.", entries.len());
    Ok(entries)
}
