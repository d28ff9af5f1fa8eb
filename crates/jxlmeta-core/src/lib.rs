//! # jxlmeta-core
//!
//! Color profile and metadata handling for JPEG XL images.
//!
//! ## Color
//!
//! - [`ColorEncoding`]: structured color space (white point, primaries,
//!   transfer function, rendering intent)
//! - [`ColorProfile`]: a structured encoding or opaque ICC bytes
//! - [`describe`]: deterministic description strings such as
//!   `RGB_D65_SRG_Rel_SRG` or `DisplayP3`
//! - [`icc::try_to_icc`] / [`icc::try_get_description`]: ICC generation
//!   and description extraction
//! - [`ProfileHandle`]: releasable wrapper for decoder-owned profiles
//!
//! ## Metadata
//!
//! - [`MetadataBoxStore`]: EXIF / XMP / JUMBF boxes captured under a
//!   [`CapturePolicy`]
//! - [`TiffExifData`]: EXIF tag decoding (orientation, camera, date, GPS)
//!
//! Malformed input is an expected condition: readers return `None` rather
//! than failing. [`Error`] is reserved for invalid arguments, released
//! handles and payload decompression.

pub mod color;
pub mod description;
pub mod encoding;
pub mod error;
pub mod exif;
pub mod handle;
pub mod icc;
pub mod math;
pub mod metadata;
pub mod profile;

pub use description::describe;
pub use encoding::{
    ColorEncoding, ColorSpaceKind, Primaries, RenderingIntent, TransferFunction, WhitePoint,
};
pub use error::{Error, Result};
pub use exif::{ExifRational, ExifSignedRational, GpsPosition, MakeModel, Orientation, TiffExifData};
pub use handle::ProfileHandle;
pub use metadata::{BoxEvent, CapturePolicy, MetadataBox, MetadataBoxStore, MetadataBoxType};
pub use profile::ColorProfile;
