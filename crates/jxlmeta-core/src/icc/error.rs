//! ICC Profile Error Types

use thiserror::Error;

/// Reasons an ICC blob is rejected by the reader
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IccError {
    /// Profile data is too small
    #[error("Profile too small: expected {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    /// Invalid profile signature (should be 'acsp')
    #[error("Invalid profile signature: 0x{0:08X} (expected 'acsp')")]
    InvalidSignature(u32),

    /// Tag count cannot fit in the buffer or is unreasonably large
    #[error("Implausible tag count: {0}")]
    ImplausibleTagCount(u32),

    /// Tag offset is out of bounds
    #[error("Tag '{tag:08X}' out of bounds: offset {offset} + size {size} > profile size {profile_size}")]
    TagOutOfBounds {
        tag: u32,
        offset: u32,
        size: u32,
        profile_size: usize,
    },

    /// Required tag is missing
    #[error("Required tag missing: '{0:08X}'")]
    MissingTag(u32),

    /// Tag data cannot be decoded as a supported type
    #[error("Unsupported type '{type_sig:08X}' for tag '{tag:08X}'")]
    UnsupportedTagType { tag: u32, type_sig: u32 },

    /// Corrupted or invalid data
    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}
