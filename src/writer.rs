use crate::config::{AppConfig, OutputFormat};
use crate::error::AppError;
use crate::metadata::PictureEntry;
use crate::writers::{csv::CsvWriter, gpx::GpxWriter};
use std::fs::File;
use std::io::BufWriter;

/// Destination for located pictures.
pub trait LocationWriter {
    fn write_entry(&mut self, entry: &PictureEntry) -> Result<(), AppError>;

    /// Completes the artifact and flushes it.
    fn finish(self: Box<Self>) -> Result<(), AppError>;
}

/// Creates (or truncates) the configured output file and picks the writer for its format.
pub fn open_writer(config: &AppConfig) -> Result<Box<dyn LocationWriter>, AppError> {
    let path = config.resolved_output_path();
    log::info!("Writing {} output to {}", config.output_format, path.display());

    let out = BufWriter::new(File::create(&path)?);
    let writer: Box<dyn LocationWriter> = match config.output_format {
        OutputFormat::Csv => Box::new(CsvWriter::new(out)),
        OutputFormat::Gpx => Box::new(GpxWriter::new(out, config.waypoint_names)),
    };
    Ok(writer)
}
