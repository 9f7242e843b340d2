use crate::error::AppError;
use exif::{Exif, Reader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Outcome of reading embedded metadata from one file.
pub enum Extraction {
    Found(Exif),
    Absent(AbsentReason),
}

#[derive(Debug)]
pub enum AbsentReason {
    /// The container was understood but carries no EXIF block.
    NoMetadata,
    /// The file could not be opened or parsed.
    Unreadable(AppError),
}

/// Reads the EXIF block of `path`. Never fails: problems are reported
/// through the log and come back as [`Extraction::Absent`].
pub fn extract(path: &Path) -> Extraction {
    log::trace!("Extracting EXIF data for: {:?}", path);
    match read_exif(path) {
        Ok(exif) => {
            log::trace!("EXIF data found for {:?}", path);
            Extraction::Found(exif)
        }
        Err(AppError::Exif(exif::Error::NotFound(_))) => {
            log::debug!("No EXIF data found for {:?}", path);
            Extraction::Absent(AbsentReason::NoMetadata)
        }
        Err(e) => {
            log::warn!("Couldn't read {}: {}", path.display(), e);
            Extraction::Absent(AbsentReason::Unreadable(e))
        }
    }
}

fn read_exif(path: &Path) -> Result<Exif, AppError> {
    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut buf_reader)?;
    Ok(exif)
}

/// Display string used to identify a picture in the output.
pub fn identifier(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
