//! EXIF decoding
//!
//! Exif boxes carry a TIFF structure behind a 4-byte offset prefix.
//! [`TiffExifData`] walks IFD0 along with its Exif and GPS sub-IFDs and
//! exposes the handful of tags this crate interprets. Missing tags are not
//! errors; accessors return `None`.
//!
//! ```ignore
//! if let Some(exif) = TiffExifData::try_parse(&payload) {
//!     if let Some(orientation) = exif.try_get_orientation() {
//!         // rotate before display
//!     }
//! }
//! ```

mod error;
mod gps;
mod orientation;
mod tiff;
mod value;

pub use error::ExifError;
pub use gps::{GpsPosition, gps_to_decimal};
pub use orientation::Orientation;
pub use tiff::{ByteOrder, MIN_EXIF_LEN, TIFF_MAGIC, TiffExifData};
pub use value::{ExifRational, ExifSignedRational, ExifValue};

use chrono::NaiveDateTime;

pub const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;
pub const TAG_MAKE: u16 = 0x010F;
pub const TAG_MODEL: u16 = 0x0110;
pub const TAG_ORIENTATION: u16 = 0x0112;
pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub use tiff::{TAG_EXIF_IFD, TAG_GPS_IFD};

pub const GPS_LATITUDE_REF: u16 = 0x0001;
pub const GPS_LATITUDE: u16 = 0x0002;
pub const GPS_LONGITUDE_REF: u16 = 0x0003;
pub const GPS_LONGITUDE: u16 = 0x0004;
pub const GPS_ALTITUDE_REF: u16 = 0x0005;
pub const GPS_ALTITUDE: u16 = 0x0006;

/// EXIF timestamps: "YYYY:MM:DD HH:MM:SS"
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Camera make and model; at least one is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeModel {
    pub make: Option<String>,
    pub model: Option<String>,
}

impl TiffExifData {
    fn ascii(&self, id: u16) -> Option<&str> {
        self.tag(id)
            .and_then(|v| v.as_ascii())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn try_get_orientation(&self) -> Option<Orientation> {
        self.tag(TAG_ORIENTATION)
            .and_then(|v| v.first_u32())
            .and_then(Orientation::from_exif)
    }

    pub fn try_get_make_model(&self) -> Option<MakeModel> {
        let make = self.ascii(TAG_MAKE).map(str::to_string);
        let model = self.ascii(TAG_MODEL).map(str::to_string);
        if make.is_none() && model.is_none() {
            return None;
        }
        Some(MakeModel { make, model })
    }

    /// DateTime, falling back to DateTimeOriginal, unparsed
    pub fn date_time_raw(&self) -> Option<&str> {
        self.ascii(TAG_DATE_TIME)
            .or_else(|| self.ascii(TAG_DATE_TIME_ORIGINAL))
    }

    pub fn try_get_date_time(&self) -> Option<NaiveDateTime> {
        let raw = self.date_time_raw()?;
        NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
            .inspect_err(|e| log::debug!("unparseable EXIF date {:?}: {}", raw, e))
            .ok()
    }

    pub fn image_description(&self) -> Option<&str> {
        self.ascii(TAG_IMAGE_DESCRIPTION)
    }

    /// Latitude and longitude in signed decimal degrees
    pub fn try_get_gps(&self) -> Option<GpsPosition> {
        let coordinate = |value: u16, reference: u16| {
            let dms = self.gps_tag(value)?.as_rationals()?;
            let reference = self.gps_tag(reference)?.as_ascii()?;
            gps_to_decimal(dms, reference)
        };

        let latitude = coordinate(GPS_LATITUDE, GPS_LATITUDE_REF)?;
        let longitude = coordinate(GPS_LONGITUDE, GPS_LONGITUDE_REF)?;
        let altitude = self
            .gps_tag(GPS_ALTITUDE)
            .and_then(|v| v.as_rationals())
            .and_then(|r| r.first())
            .map(|r| {
                let below_sea_level = self
                    .gps_tag(GPS_ALTITUDE_REF)
                    .and_then(|v| v.first_u32())
                    == Some(1);
                if below_sea_level { -r.to_f64() } else { r.to_f64() }
            });

        Some(GpsPosition {
            latitude,
            longitude,
            altitude,
        })
    }
}
