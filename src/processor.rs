use crate::dedup::CoordinateDeduplicator;
use crate::error::AppError;
use crate::extractor::{self, AbsentReason, Extraction};
use crate::locator;
use crate::metadata::PictureEntry;
use crate::walker;
use exif::Exif;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

/// Counters for one run over a picture directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub scanned: usize,
    pub no_metadata: usize,
    pub unreadable: usize,
    pub located: usize,
    pub duplicates: usize,
    pub emitted: usize,
}

/// Reads every entry of `directory` and hands each picture with a
/// not-yet-seen location to `sink`, in case-insensitive file name order.
///
/// Unreadable files and files without a location are skipped. Failing to
/// list the directory, or any error returned by `sink`, aborts the run.
pub fn process<F>(directory: &Path, mut sink: F) -> Result<ProcessSummary, AppError>
where
    F: FnMut(&PictureEntry) -> Result<(), AppError>,
{
    let paths = walker::list_entries(directory)?;
    let mut summary = ProcessSummary {
        scanned: paths.len(),
        ..Default::default()
    };

    let mut found = Vec::new();
    for path in &paths {
        match extractor::extract(path) {
            Extraction::Found(exif) => found.push((extractor::identifier(path), exif)),
            Extraction::Absent(AbsentReason::NoMetadata) => summary.no_metadata += 1,
            Extraction::Absent(AbsentReason::Unreadable(e)) => {
                log::trace!("Excluding {}: {}", path.display(), e);
                summary.unreadable += 1;
            }
        }
    }

    emit_unique(group_sorted(found), &mut summary, &mut sink)?;
    Ok(summary)
}

/// Groups metadata blocks by identifier, keeping each group's blocks in
/// arrival order, and sorts the groups with [`compare_identifiers`].
fn group_sorted(found: Vec<(String, Exif)>) -> Vec<(String, Vec<Exif>)> {
    let mut grouped: HashMap<String, Vec<Exif>> = HashMap::new();
    for (identifier, exif) in found {
        grouped.entry(identifier).or_default().push(exif);
    }

    let mut grouped: Vec<(String, Vec<Exif>)> = grouped.into_iter().collect();
    grouped.sort_by(|(a, _), (b, _)| compare_identifiers(a, b));
    grouped
}

fn emit_unique<F>(grouped: Vec<(String, Vec<Exif>)>, summary: &mut ProcessSummary, sink: &mut F) -> Result<(), AppError>
where
    F: FnMut(&PictureEntry) -> Result<(), AppError>,
{
    let mut dedup = CoordinateDeduplicator::new();
    for (identifier, blocks) in grouped {
        for exif in &blocks {
            let Some(coordinate) = locator::locate(exif) else {
                log::trace!("No GPS location in {}", identifier);
                continue;
            };
            summary.located += 1;

            if !dedup.admit(coordinate) {
                log::debug!(
                    "Skipping {}: location {}, {} already emitted",
                    identifier,
                    coordinate.latitude,
                    coordinate.longitude
                );
                summary.duplicates += 1;
                continue;
            }

            sink(&PictureEntry {
                identifier: identifier.clone(),
                coordinate,
            })?;
            summary.emitted += 1;
        }
    }

    log::debug!("{} distinct locations seen", dedup.len());
    Ok(())
}

/// Case-insensitive ordering of file identifiers. Names equal ignoring case
/// fall back to byte order so the result never depends on listing order.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().map(fold_case);
    let folded_b = b.chars().map(fold_case);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Folds one character at a time; characters whose lowercase form spans
/// several characters (`İ`) are compared as they are.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
