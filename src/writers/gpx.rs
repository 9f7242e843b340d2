//! GPX 1.1 waypoint document.
//!
//! Waypoints are buffered until [`LocationWriter::finish`], which writes the
//! whole document in one go with two-space indentation.

use crate::error::AppError;
use crate::metadata::PictureEntry;
use crate::writer::LocationWriter;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const GPX_VERSION: &str = "1.1";
const CREATOR: &str = env!("CARGO_PKG_NAME");

pub struct GpxWriter<W: Write> {
    out: W,
    waypoints: Vec<PictureEntry>,
    waypoint_names: bool,
}

impl<W: Write> GpxWriter<W> {
    pub fn new(out: W, waypoint_names: bool) -> Self {
        Self {
            out,
            waypoints: Vec::new(),
            waypoint_names,
        }
    }

    fn write_document(&mut self) -> Result<(), AppError> {
        let mut writer = Writer::new_with_indent(&mut self.out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("gpx");
        root.push_attribute(("version", GPX_VERSION));
        root.push_attribute(("creator", CREATOR));
        root.push_attribute(("xmlns", GPX_NAMESPACE));
        writer.write_event(Event::Start(root))?;

        for waypoint in &self.waypoints {
            // Display gives the shortest string that parses back to the same f64.
            let lat = waypoint.coordinate.latitude.to_string();
            let lon = waypoint.coordinate.longitude.to_string();
            let mut wpt = BytesStart::new("wpt");
            wpt.push_attribute(("lat", lat.as_str()));
            wpt.push_attribute(("lon", lon.as_str()));

            if self.waypoint_names {
                writer.write_event(Event::Start(wpt))?;
                writer.write_event(Event::Start(BytesStart::new("name")))?;
                writer.write_event(Event::Text(BytesText::new(&waypoint.identifier)))?;
                writer.write_event(Event::End(BytesEnd::new("name")))?;
                writer.write_event(Event::End(BytesEnd::new("wpt")))?;
            } else {
                writer.write_event(Event::Empty(wpt))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("gpx")))?;
        writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> LocationWriter for GpxWriter<W> {
    fn write_entry(&mut self, entry: &PictureEntry) -> Result<(), AppError> {
        self.waypoints.push(entry.clone());
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<(), AppError> {
        log::debug!("Serializing {} waypoints", self.waypoints.len());
        self.write_document()?;
        self.out.flush()?;
        Ok(())
    }
}
