use crate::metadata::Coordinate;
use exif::{Context, Exif, In, Rational, Tag, Value};

/// Finds the location recorded in the GPS block of `exif`.
///
/// Only the first IFD carrying GPS tags is consulted. Returns `None` when
/// there is no GPS block or it lacks a complete latitude/longitude pair.
pub fn locate(exif: &Exif) -> Option<Coordinate> {
    let ifd = gps_block(exif)?;
    let latitude = resolve_axis(exif, ifd, Tag::GPSLatitude, Tag::GPSLatitudeRef, b"S")?;
    let longitude = resolve_axis(exif, ifd, Tag::GPSLongitude, Tag::GPSLongitudeRef, b"W")?;
    Some(Coordinate::from_lon_lat(longitude, latitude))
}

fn gps_block(exif: &Exif) -> Option<In> {
    exif.fields()
        .find(|field| field.tag.context() == Context::Gps)
        .map(|field| field.ifd_num)
}

fn resolve_axis(exif: &Exif, ifd: In, value_tag: Tag, ref_tag: Tag, negative_ref: &[u8]) -> Option<f64> {
    let value = exif.get_field(value_tag, ifd)?;
    let reference = exif.get_field(ref_tag, ifd)?;

    let magnitude = dms_to_decimal(&value.value)?;
    let negative = match &reference.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|part| part.eq_ignore_ascii_case(negative_ref))
            .unwrap_or(false),
        _ => return None,
    };
    log::trace!("Resolved {} = {} (negative: {})", value_tag, magnitude, negative);

    Some(if negative { -magnitude } else { magnitude })
}

/// Degrees, minutes, seconds rationals to decimal degrees.
///
/// A zero numerator counts as zero whatever the denominator; only a NaN
/// result makes the axis unresolvable.
fn dms_to_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(parts) if parts.len() == 3 => {
            let decimal = component(&parts[0]).abs() + component(&parts[1]) / 60.0 + component(&parts[2]) / 3600.0;
            (!decimal.is_nan()).then_some(decimal)
        }
        _ => None,
    }
}

fn component(rational: &Rational) -> f64 {
    if rational.num == 0 {
        0.0
    } else {
        rational.to_f64()
    }
}
