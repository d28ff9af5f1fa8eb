//! Defensive ICC reading
//!
//! Only the header and the description tag are looked at. Every failure
//! is reported as `None`; the reason is logged at debug level.

use log::{debug, trace};

use super::error::IccError;
use super::header::{HEADER_SIZE, IccHeader};
use super::tags::parse_text_tag;
use super::types::TagSignature;

/// Upper bound on tag count before a profile is considered bogus
pub const MAX_TAG_COUNT: u32 = 1024;

const TAG_TABLE_START: usize = HEADER_SIZE + 4;
const TAG_ENTRY_SIZE: usize = 12;

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    /// Tag signature
    pub signature: TagSignature,
    /// Offset from start of profile
    pub offset: u32,
    /// Size of tag data
    pub size: u32,
}

impl TagEntry {
    /// Tag bytes, bounds-checked against the profile
    pub fn data<'a>(&self, profile: &'a [u8]) -> Result<&'a [u8], IccError> {
        let start = self.offset as usize;
        start
            .checked_add(self.size as usize)
            .and_then(|end| profile.get(start..end))
            .ok_or(IccError::TagOutOfBounds {
                tag: self.signature.0,
                offset: self.offset,
                size: self.size,
                profile_size: profile.len(),
            })
    }
}

/// Parse the tag table that follows the header
pub fn read_tag_table(data: &[u8]) -> Result<Vec<TagEntry>, IccError> {
    IccHeader::parse(data)?;

    let count_bytes = data.get(HEADER_SIZE..TAG_TABLE_START).ok_or(IccError::TooSmall {
        expected: TAG_TABLE_START,
        actual: data.len(),
    })?;
    let count = u32::from_be_bytes([count_bytes[0], count_bytes[1], count_bytes[2], count_bytes[3]]);

    let capacity = (data.len() - TAG_TABLE_START) / TAG_ENTRY_SIZE;
    if count > MAX_TAG_COUNT || count as usize > capacity {
        return Err(IccError::ImplausibleTagCount(count));
    }

    let entries = data[TAG_TABLE_START..TAG_TABLE_START + count as usize * TAG_ENTRY_SIZE]
        .chunks_exact(TAG_ENTRY_SIZE)
        .map(|e| TagEntry {
            signature: TagSignature(u32::from_be_bytes([e[0], e[1], e[2], e[3]])),
            offset: u32::from_be_bytes([e[4], e[5], e[6], e[7]]),
            size: u32::from_be_bytes([e[8], e[9], e[10], e[11]]),
        })
        .collect();

    Ok(entries)
}

/// Read the profile description, reporting why it could not be read
pub fn read_description(data: &[u8]) -> Result<String, IccError> {
    let entry = read_tag_table(data)?
        .into_iter()
        .find(|e| e.signature == TagSignature::DESC)
        .ok_or(IccError::MissingTag(TagSignature::DESC.0))?;

    trace!("desc tag at offset {} size {}", entry.offset, entry.size);
    let text = parse_text_tag(entry.data(data)?, entry.signature.0)?;
    Ok(text.trim_end_matches(['\0', ' ']).to_string())
}

/// Profile description text, or None for anything malformed
pub fn try_get_description(data: &[u8]) -> Option<String> {
    match read_description(data) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("no ICC description: {}", e);
            None
        }
    }
}

/// Header of an ICC blob, or None when it is not one
pub fn try_read_header(data: &[u8]) -> Option<IccHeader> {
    IccHeader::parse(data)
        .inspect_err(|e| debug!("rejected ICC header: {}", e))
        .ok()
}
