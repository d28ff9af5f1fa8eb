//! GPS coordinate conversion

use super::value::ExifRational;

/// Decoded GPS position in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters; negative below sea level
    pub altitude: Option<f64>,
}

/// Degrees/minutes/seconds plus hemisphere to signed decimal degrees
///
/// South and west are negative. None when fewer than three components are
/// given.
pub fn gps_to_decimal(dms: &[ExifRational], reference: &str) -> Option<f64> {
    let [degrees, minutes, seconds] = dms.get(..3)? else {
        return None;
    };
    let value = degrees.to_f64() + minutes.to_f64() / 60.0 + seconds.to_f64() / 3600.0;
    let negative = matches!(reference.trim().chars().next(), Some('S' | 'W' | 's' | 'w'));
    Some(if negative { -value } else { value })
}
