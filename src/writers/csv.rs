use crate::error::AppError;
use crate::metadata::PictureEntry;
use crate::writer::LocationWriter;
use std::io::Write;

/// Writes `identifier, latitude, longitude` lines as entries arrive. No header.
pub struct CsvWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LocationWriter for CsvWriter<W> {
    fn write_entry(&mut self, entry: &PictureEntry) -> Result<(), AppError> {
        // Debug keeps the fractional part and switches to exponent form for extreme values.
        writeln!(
            self.out,
            "{}, {:?}, {:?}",
            entry.identifier, entry.coordinate.latitude, entry.coordinate.longitude
        )?;
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}
