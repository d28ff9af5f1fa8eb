//! EXIF parse errors

use thiserror::Error;

/// Reasons a TIFF/EXIF blob is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExifError {
    #[error("EXIF data too short: {0} bytes")]
    TooShort(usize),

    #[error("Unrecognized TIFF byte order marker {0:02X?}")]
    BadByteOrder([u8; 2]),

    #[error("Bad TIFF magic number {0}")]
    BadMagic(u16),

    #[error("IFD offset {0} is outside the TIFF data")]
    IfdOutOfBounds(u32),
}
