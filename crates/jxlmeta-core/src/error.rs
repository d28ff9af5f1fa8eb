//! Error types for jxlmeta
//!
//! Malformed metadata (bad ICC headers, bad TIFF headers, truncated boxes) is
//! not reported through this type. Those paths return `None` instead. The
//! variants here cover programmer errors and use of released handles.

use thiserror::Error;

/// Result type for jxlmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jxlmeta operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Structured color encoding arguments are inconsistent
    #[error("Invalid color encoding: {0}")]
    InvalidEncoding(String),

    /// The requested derivation is not possible for this profile
    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),

    /// A profile handle was used after `release()`
    #[error("Color profile handle has been released")]
    Disposed,

    /// Brotli stream inside a compressed box is corrupt
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Decompressed payload exceeds the caller's limit
    #[error("Payload too large: limit {limit} bytes, got at least {actual}")]
    PayloadTooLarge { limit: usize, actual: usize },

    /// Capture policy document could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
