pub mod csv;
pub mod gpx;
