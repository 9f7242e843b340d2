//! Fixtures for tests that need real EXIF payloads on disk.
//!
//! Files are assembled byte by byte as little-endian TIFF structures wrapped
//! in a minimal JPEG APP1 segment, which is enough for `kamadak-exif`.

use std::fs;
use std::path::{Path, PathBuf};

const TIFF_ASCII: u16 = 2;
const TIFF_SHORT: u16 = 3;
const TIFF_LONG: u16 = 4;
const TIFF_RATIONAL: u16 = 5;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_POINTER: u16 = 0x8825;
const TAG_GPS_LATITUDE_REF: u16 = 1;
const TAG_GPS_LATITUDE: u16 = 2;
const TAG_GPS_LONGITUDE_REF: u16 = 3;
const TAG_GPS_LONGITUDE: u16 = 4;
const TAG_GPS_ALTITUDE: u16 = 6;

pub type Dms = [(u32, u32); 3];

/// GPS tags to embed; `None` leaves the tag out.
#[derive(Debug, Clone, Default)]
pub struct GpsFields {
    pub latitude: Option<Dms>,
    pub latitude_ref: Option<u8>,
    pub longitude: Option<Dms>,
    pub longitude_ref: Option<u8>,
}

impl GpsFields {
    /// Degrees given as a single rational, minutes and seconds zero.
    pub fn degrees(lat: (u32, u32), lat_ref: u8, lon: (u32, u32), lon_ref: u8) -> Self {
        Self {
            latitude: Some([lat, (0, 1), (0, 1)]),
            latitude_ref: Some(lat_ref),
            longitude: Some([lon, (0, 1), (0, 1)]),
            longitude_ref: Some(lon_ref),
        }
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn rational_entry(tag: u16, dms: &Dms) -> Entry {
    let mut data = Vec::with_capacity(24);
    for (num, denom) in dms {
        data.extend_from_slice(&num.to_le_bytes());
        data.extend_from_slice(&denom.to_le_bytes());
    }
    Entry { tag, kind: TIFF_RATIONAL, count: 3, data }
}

fn ascii_entry(tag: u16, value: u8) -> Entry {
    Entry { tag, kind: TIFF_ASCII, count: 2, data: vec![value, 0] }
}

/// Bytes taken by an IFD table plus its out-of-line values.
fn ifd_len(entries: &[Entry]) -> u32 {
    let data: usize = entries.iter().filter(|e| e.data.len() > 4).map(|e| e.data.len()).sum();
    2 + 12 * entries.len() as u32 + 4 + data as u32
}

/// Serializes one IFD starting at `offset`, with out-of-line values after it.
/// `next` is the offset of the following IFD, 0 for none.
fn write_ifd(out: &mut Vec<u8>, offset: u32, entries: &[Entry], next: u32) {
    let table_len = 2 + 12 * entries.len() as u32 + 4;
    let mut data_offset = offset + table_len;
    let mut data_area = Vec::new();

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..entry.data.len()].copy_from_slice(&entry.data);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&data_offset.to_le_bytes());
            data_offset += entry.data.len() as u32;
            data_area.extend_from_slice(&entry.data);
        }
    }
    out.extend_from_slice(&next.to_le_bytes());
    out.extend_from_slice(&data_area);
}

fn tiff_header() -> Vec<u8> {
    let mut out = b"II".to_vec();
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());
    out
}

fn gps_pointer(offset: u32) -> Entry {
    Entry { tag: TAG_GPS_POINTER, kind: TIFF_LONG, count: 1, data: offset.to_le_bytes().to_vec() }
}

fn gps_entries(fields: &GpsFields) -> Vec<Entry> {
    let mut gps_entries = Vec::new();
    if let Some(value) = fields.latitude_ref {
        gps_entries.push(ascii_entry(TAG_GPS_LATITUDE_REF, value));
    }
    if let Some(dms) = &fields.latitude {
        gps_entries.push(rational_entry(TAG_GPS_LATITUDE, dms));
    }
    if let Some(value) = fields.longitude_ref {
        gps_entries.push(ascii_entry(TAG_GPS_LONGITUDE_REF, value));
    }
    if let Some(dms) = &fields.longitude {
        gps_entries.push(rational_entry(TAG_GPS_LONGITUDE, dms));
    }
    if gps_entries.is_empty() {
        // Keep the GPS IFD non-empty so the block itself is present.
        gps_entries.push(Entry {
            tag: TAG_GPS_ALTITUDE,
            kind: TIFF_RATIONAL,
            count: 1,
            data: [34u32.to_le_bytes(), 1u32.to_le_bytes()].concat(),
        });
    }

    gps_entries
}

/// TIFF/EXIF payload whose primary IFD only points at a GPS IFD.
pub fn gps_tiff(fields: &GpsFields) -> Vec<u8> {
    let primary = [gps_pointer(8 + ifd_len(&[gps_pointer(0)]))];
    let gps_offset = 8 + ifd_len(&primary);
    let mut out = tiff_header();
    write_ifd(&mut out, 8, &primary, 0);
    write_ifd(&mut out, gps_offset, &gps_entries(fields), 0);
    out
}

/// Like [`gps_tiff`], plus a thumbnail IFD with its own GPS IFD.
pub fn two_gps_tiff(primary_fields: &GpsFields, thumbnail_fields: &GpsFields) -> Vec<u8> {
    let pointer_len = ifd_len(&[gps_pointer(0)]);
    let first_gps = gps_entries(primary_fields);
    let second_gps = gps_entries(thumbnail_fields);

    let first_gps_offset = 8 + pointer_len;
    let thumbnail_offset = first_gps_offset + ifd_len(&first_gps);
    let second_gps_offset = thumbnail_offset + pointer_len;

    let mut out = tiff_header();
    write_ifd(&mut out, 8, &[gps_pointer(first_gps_offset)], thumbnail_offset);
    write_ifd(&mut out, first_gps_offset, &first_gps, 0);
    write_ifd(&mut out, thumbnail_offset, &[gps_pointer(second_gps_offset)], 0);
    write_ifd(&mut out, second_gps_offset, &second_gps, 0);
    out
}

/// TIFF/EXIF payload with an orientation tag and no GPS IFD.
pub fn plain_tiff() -> Vec<u8> {
    let mut out = tiff_header();
    write_ifd(
        &mut out,
        8,
        &[Entry { tag: TAG_ORIENTATION, kind: TIFF_SHORT, count: 1, data: 1u16.to_le_bytes().to_vec() }],
        0,
    );
    out
}

/// Minimal JPEG: SOI, one Exif APP1 segment, EOI.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(tiff);
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// JPEG that reaches start-of-scan without any APP1 segment.
pub fn bare_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xDA, 0x00, 0x02, 0xFF, 0xD9]
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("failed to write fixture");
    path
}

pub fn write_gps_jpeg(dir: &Path, name: &str, fields: &GpsFields) -> PathBuf {
    write_file(dir, name, &jpeg_with_exif(&gps_tiff(fields)))
}

/// 52.5 N, 13.4 E.
pub fn berlin() -> GpsFields {
    GpsFields::degrees((525, 10), b'N', (134, 10), b'E')
}

/// 48.85 N, 2.35 E.
pub fn paris() -> GpsFields {
    GpsFields::degrees((4885, 100), b'N', (235, 100), b'E')
}
