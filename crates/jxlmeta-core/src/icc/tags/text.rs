//! Text Tag Types
//!
//! ICC profiles can contain text in several formats:
//! - text: Simple ASCII text
//! - desc: Profile description (v2 format)
//! - mluc: Multi-localized Unicode (v4 format)
//!
//! See ICC.1:2022 Sections 10.24 (text), 10.14 (desc), 10.15 (mluc)

use crate::icc::error::IccError;
use crate::icc::types::TypeSignature;

/// Parse 'text' type (simple ASCII)
pub fn parse_text(data: &[u8]) -> Result<String, IccError> {
    Ok(ascii_until_nul(data))
}

/// Parse 'desc' type (v2 profile description)
///
/// Only the ASCII part is read; the Unicode and ScriptCode parts are
/// rarely filled in correctly.
pub fn parse_desc(data: &[u8]) -> Result<String, IccError> {
    if data.len() < 4 {
        return Err(IccError::CorruptedData(
            "Description tag too small".to_string(),
        ));
    }

    // ASCII description count (includes null)
    let ascii_count = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let ascii = data
        .get(4..)
        .and_then(|rest| rest.get(..ascii_count))
        .ok_or_else(|| IccError::CorruptedData("Description ASCII data truncated".to_string()))?;

    Ok(ascii_until_nul(ascii))
}

/// Parse 'mluc' type (multi-localized Unicode)
///
/// Returns the en-US record if there is one, otherwise the first record
/// that decodes.
pub fn parse_mluc(data: &[u8]) -> Result<String, IccError> {
    if data.len() < 8 {
        return Err(IccError::CorruptedData("mluc tag too small".to_string()));
    }

    let record_count = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let record_size = u32::from_be_bytes([data[4], data[5], data[6], data[7]]) as usize;

    if record_size < 12 {
        return Err(IccError::CorruptedData(
            "mluc record size too small".to_string(),
        ));
    }

    let mut first = None;
    for i in 0..record_count {
        let Some(record) = data.get(8 + i * record_size..).and_then(|r| r.get(..12)) else {
            break;
        };

        let str_len = u32::from_be_bytes([record[4], record[5], record[6], record[7]]) as usize;
        // Relative to the start of the type data (the tag header is 8 bytes)
        let str_offset =
            (u32::from_be_bytes([record[8], record[9], record[10], record[11]]) as usize)
                .saturating_sub(8);

        let Some(text) = str_offset
            .checked_add(str_len)
            .and_then(|end| data.get(str_offset..end))
            .and_then(decode_utf16be)
        else {
            continue;
        };

        if &record[0..4] == b"enUS" {
            return Ok(text);
        }
        first.get_or_insert(text);
    }

    first.ok_or_else(|| IccError::CorruptedData("mluc has no readable record".to_string()))
}

/// Serialize a single-record en-US 'mluc' tag, including the 8-byte tag header
pub fn write_mluc(text: &str) -> Vec<u8> {
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let mut out = Vec::with_capacity(28 + utf16.len() * 2);

    out.extend_from_slice(&TypeSignature::MLUC.to_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&1u32.to_be_bytes());
    out.extend_from_slice(&12u32.to_be_bytes());
    out.extend_from_slice(b"enUS");
    out.extend_from_slice(&((utf16.len() * 2) as u32).to_be_bytes());
    out.extend_from_slice(&28u32.to_be_bytes());
    for unit in utf16 {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

fn ascii_until_nul(data: &[u8]) -> String {
    data.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// Decode UTF-16BE bytes to String, stopping at a null terminator
fn decode_utf16be(data: &[u8]) -> Option<String> {
    if data.len() % 2 != 0 {
        return None;
    }

    let utf16: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .take_while(|&c| c != 0)
        .collect();

    String::from_utf16(&utf16).ok()
}
