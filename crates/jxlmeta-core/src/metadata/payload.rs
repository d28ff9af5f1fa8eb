//! Payload access for captured boxes
//!
//! Decompression happens only on request. XMP and JUMBF payloads are not
//! parsed; the helpers here are enough to recognise their contents.

use std::io::Read;

use log::debug;

use super::box_type::MetadataBoxType;
use super::policy::DEFAULT_EXIF_SIZE_LIMIT;
use super::store::MetadataBox;
use crate::error::{Error, Result};
use crate::exif::TiffExifData;

/// Brotli window buffer size used while decompressing
const BROTLI_BUFFER_SIZE: usize = 4096;

impl MetadataBox {
    /// Payload with Brotli compression removed
    ///
    /// Uncompressed boxes are copied as-is. Fails when the decompressed
    /// payload would exceed `max_len` bytes.
    pub fn decompressed(&self, max_len: usize) -> Result<Vec<u8>> {
        if !self.is_compressed {
            return Ok(self.data.clone());
        }

        let decoder = brotli::Decompressor::new(self.data.as_slice(), BROTLI_BUFFER_SIZE);
        let mut out = Vec::new();
        decoder
            .take((max_len as u64).saturating_add(1))
            .read_to_end(&mut out)
            .map_err(|e| Error::Decompression(e.to_string()))?;

        if out.len() > max_len {
            return Err(Error::PayloadTooLarge {
                limit: max_len,
                actual: out.len(),
            });
        }
        Ok(out)
    }

    /// Decode an EXIF box, decompressing it first if needed
    ///
    /// None for non-EXIF boxes and for anything that fails to decode.
    pub fn parse_exif(&self) -> Option<TiffExifData> {
        if self.box_type != MetadataBoxType::Exif {
            return None;
        }
        let payload = self
            .decompressed(DEFAULT_EXIF_SIZE_LIMIT)
            .inspect_err(|e| debug!("EXIF box {} unreadable: {}", self.ordinal, e))
            .ok()?;
        TiffExifData::try_parse(&payload)
    }
}

/// Whether `needle` occurs anywhere in `bytes`
pub fn contains_text(bytes: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    needle.is_empty() || bytes.windows(needle.len()).any(|w| w == needle)
}

/// Label of the description box that opens a JUMBF superbox payload
///
/// The `jumd` box holds a 16-byte content-type UUID, a toggles byte and,
/// when toggle bit 1 is set, a NUL-terminated UTF-8 label.
pub fn jumbf_label(bytes: &[u8]) -> Option<String> {
    let size = u32::from_be_bytes(bytes.get(..4)?.try_into().ok()?) as usize;
    if bytes.get(4..8)? != b"jumd" {
        return None;
    }
    let content = bytes.get(8..size.max(8).min(bytes.len()))?;

    let toggles = *content.get(16)?;
    if toggles & 0x02 == 0 {
        return None;
    }
    let label = content.get(17..)?.split(|&b| b == 0).next()?;
    std::str::from_utf8(label).ok().map(str::to_string)
}
