// src/metadata.rs

use std::hash::{Hash, Hasher};

/// A latitude/longitude pair in decimal degrees.
///
/// Two coordinates are equal only when both components have the same bit
/// pattern, so `0.0` and `-0.0` are distinct and no rounding tolerance applies.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

/// A located picture handed to the output sink.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureEntry {
    pub identifier: String,
    pub coordinate: Coordinate,
}
