//! TIFF structure reader for EXIF payloads
//!
//! Operates on borrowed slices; every read is bounds-checked and a bad
//! entry drops only that entry.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::error::ExifError;
use super::value::{ExifRational, ExifSignedRational, ExifValue};

/// TIFF magic number.
pub const TIFF_MAGIC: u16 = 0x002A;
/// Size of the offset prefix that precedes the TIFF header in an Exif box.
pub const EXIF_PREFIX_LEN: usize = 4;
/// Size of TIFF header in bytes.
pub const TIFF_HEADER_LEN: usize = 8;
/// Prefix, header and an IFD0 entry count.
pub const MIN_EXIF_LEN: usize = EXIF_PREFIX_LEN + TIFF_HEADER_LEN + 2;
/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_LEN: usize = 12;

/// Exif sub-IFD pointer.
pub const TAG_EXIF_IFD: u16 = 0x8769;
/// GPS sub-IFD pointer.
pub const TAG_GPS_IFD: u16 = 0x8825;

/// TIFF field types.
pub const TYPE_BYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_SHORT: u16 = 3;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_RATIONAL: u16 = 5;
pub const TYPE_UNDEFINED: u16 = 7;
pub const TYPE_SLONG: u16 = 9;
pub const TYPE_SRATIONAL: u16 = 10;

/// Return the size in bytes of one value for a given TIFF field type.
#[inline]
pub fn type_unit_size(field_type: u16) -> Option<usize> {
    match field_type {
        TYPE_BYTE | TYPE_ASCII | TYPE_UNDEFINED => Some(1),
        TYPE_SHORT => Some(2),
        TYPE_LONG | TYPE_SLONG => Some(4),
        TYPE_RATIONAL | TYPE_SRATIONAL => Some(8),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    #[inline]
    pub fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let bytes: [u8; 2] = data.get(offset..offset.checked_add(2)?)?.try_into().ok()?;
        Some(match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let bytes: [u8; 4] = data.get(offset..offset.checked_add(4)?)?.try_into().ok()?;
        Some(match self {
            Self::LittleEndian => u32::from_le_bytes(bytes),
            Self::BigEndian => u32::from_be_bytes(bytes),
        })
    }
}

/// Single IFD entry (tag, type, count, value/offset).
#[derive(Debug, Clone, Copy)]
struct IfdEntry {
    tag: u16,
    field_type: u16,
    count: u32,
    /// Offset of the 4-byte value field within the TIFF data
    value_field: usize,
}

/// Parsed TIFF/EXIF tags
#[derive(Debug, Clone, PartialEq)]
pub struct TiffExifData {
    pub byte_order: ByteOrder,
    /// IFD0 tags merged with the Exif sub-IFD (IFD0 wins on conflict)
    pub tags: BTreeMap<u16, ExifValue>,
    /// GPS sub-IFD tags
    pub gps_tags: BTreeMap<u16, ExifValue>,
}

impl TiffExifData {
    /// Parse an Exif box payload: 4-byte offset prefix, then TIFF data
    pub fn parse(bytes: &[u8]) -> Result<Self, ExifError> {
        if bytes.len() < MIN_EXIF_LEN {
            return Err(ExifError::TooShort(bytes.len()));
        }

        let prefix = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let tiff = EXIF_PREFIX_LEN
            .checked_add(prefix)
            .and_then(|start| bytes.get(start..))
            .filter(|t| t.len() >= TIFF_HEADER_LEN + 2)
            .ok_or(ExifError::TooShort(bytes.len()))?;

        let marker = [tiff[0], tiff[1]];
        let order = ByteOrder::from_marker(marker).ok_or(ExifError::BadByteOrder(marker))?;

        let magic = order.read_u16(tiff, 2).unwrap_or_default();
        if magic != TIFF_MAGIC {
            return Err(ExifError::BadMagic(magic));
        }

        let ifd0 = order.read_u32(tiff, 4).unwrap_or_default();
        let mut visited = vec![ifd0];
        let mut tags = read_ifd(order, tiff, ifd0).ok_or(ExifError::IfdOutOfBounds(ifd0))?;

        let mut gps_tags = BTreeMap::new();
        for (pointer, target) in [(TAG_EXIF_IFD, false), (TAG_GPS_IFD, true)] {
            let Some(offset) = tags.get(&pointer).and_then(|v| v.first_u32()) else {
                continue;
            };
            if visited.contains(&offset) {
                debug!("ignoring cyclic sub-IFD pointer 0x{:04X} -> {}", pointer, offset);
                continue;
            }
            visited.push(offset);

            let Some(sub) = read_ifd(order, tiff, offset) else {
                debug!("sub-IFD 0x{:04X} at {} out of bounds", pointer, offset);
                continue;
            };
            if target {
                gps_tags = sub;
            } else {
                for (tag, value) in sub {
                    tags.entry(tag).or_insert(value);
                }
            }
        }

        Ok(Self {
            byte_order: order,
            tags,
            gps_tags,
        })
    }

    /// Like [`parse`](Self::parse), returning None for malformed input
    pub fn try_parse(bytes: &[u8]) -> Option<Self> {
        Self::parse(bytes)
            .inspect_err(|e| debug!("rejected EXIF data: {}", e))
            .ok()
    }

    pub fn tag(&self, id: u16) -> Option<&ExifValue> {
        self.tags.get(&id)
    }

    pub fn gps_tag(&self, id: u16) -> Option<&ExifValue> {
        self.gps_tags.get(&id)
    }
}

/// Read all decodable entries of the IFD at `offset`
///
/// None when the entry count itself is out of bounds. A truncated entry
/// list keeps the entries that fit.
fn read_ifd(order: ByteOrder, tiff: &[u8], offset: u32) -> Option<BTreeMap<u16, ExifValue>> {
    let offset = offset as usize;
    let count = order.read_u16(tiff, offset)? as usize;
    trace!("IFD at {} with {} entries", offset, count);

    let mut tags = BTreeMap::new();
    for i in 0..count {
        let at = offset + 2 + i * IFD_ENTRY_LEN;
        let Some(entry) = read_ifd_entry(order, tiff, at) else {
            debug!("IFD at {} truncated after {} entries", offset, i);
            break;
        };
        match read_value(order, tiff, entry) {
            Some(value) => {
                tags.insert(entry.tag, value);
            }
            None => trace!(
                "dropping tag 0x{:04X} type {} count {}",
                entry.tag, entry.field_type, entry.count
            ),
        }
    }
    Some(tags)
}

fn read_ifd_entry(order: ByteOrder, tiff: &[u8], at: usize) -> Option<IfdEntry> {
    if tiff.len().saturating_sub(at) < IFD_ENTRY_LEN {
        return None;
    }
    Some(IfdEntry {
        tag: order.read_u16(tiff, at)?,
        field_type: order.read_u16(tiff, at + 2)?,
        count: order.read_u32(tiff, at + 4)?,
        value_field: at + 8,
    })
}

/// Locate and decode an entry's value; values of 4 bytes or less are inline
fn read_value(order: ByteOrder, tiff: &[u8], entry: IfdEntry) -> Option<ExifValue> {
    let unit = type_unit_size(entry.field_type)?;
    let total = unit.checked_mul(entry.count as usize)?;

    let start = if total <= 4 {
        entry.value_field
    } else {
        order.read_u32(tiff, entry.value_field)? as usize
    };
    let raw = tiff.get(start..start.checked_add(total)?)?;

    let u16s = || (0..raw.len() / 2).filter_map(|i| order.read_u16(raw, i * 2));
    let u32s = || (0..raw.len() / 4).filter_map(|i| order.read_u32(raw, i * 4));

    Some(match entry.field_type {
        TYPE_BYTE => ExifValue::Byte(raw.to_vec()),
        TYPE_ASCII => {
            let text = raw.split(|&b| b == 0).next().unwrap_or_default();
            ExifValue::Ascii(String::from_utf8_lossy(text).into_owned())
        }
        TYPE_SHORT => ExifValue::Short(u16s().collect()),
        TYPE_LONG => ExifValue::Long(u32s().collect()),
        TYPE_SLONG => ExifValue::SLong(u32s().map(|v| v as i32).collect()),
        TYPE_RATIONAL => {
            let words: Vec<u32> = u32s().collect();
            ExifValue::Rational(
                words
                    .chunks_exact(2)
                    .map(|p| ExifRational::new(p[0], p[1]))
                    .collect(),
            )
        }
        TYPE_SRATIONAL => {
            let words: Vec<u32> = u32s().collect();
            ExifValue::SRational(
                words
                    .chunks_exact(2)
                    .map(|p| ExifSignedRational::new(p[0] as i32, p[1] as i32))
                    .collect(),
            )
        }
        _ => ExifValue::Undefined(raw.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prefix + header + one IFD0 with the given raw entries
    fn exif(order: ByteOrder, entries: &[[u8; 12]], tail: &[u8]) -> Vec<u8> {
        let mut out = vec![0, 0, 0, 0];
        match order {
            ByteOrder::LittleEndian => {
                out.extend_from_slice(b"II");
                out.extend_from_slice(&42u16.to_le_bytes());
                out.extend_from_slice(&8u32.to_le_bytes());
                out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
            }
            ByteOrder::BigEndian => {
                out.extend_from_slice(b"MM");
                out.extend_from_slice(&42u16.to_be_bytes());
                out.extend_from_slice(&8u32.to_be_bytes());
                out.extend_from_slice(&(entries.len() as u16).to_be_bytes());
            }
        }
        for e in entries {
            out.extend_from_slice(e);
        }
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(tail);
        out
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(TiffExifData::try_parse(&[]).is_none());
        assert_eq!(TiffExifData::parse(&[0; 13]), Err(ExifError::TooShort(13)));

        let mut bad_order = exif(ByteOrder::LittleEndian, &[], &[]);
        bad_order[4..6].copy_from_slice(b"XX");
        assert_eq!(
            TiffExifData::parse(&bad_order),
            Err(ExifError::BadByteOrder(*b"XX"))
        );

        let mut bad_magic = exif(ByteOrder::BigEndian, &[], &[]);
        bad_magic[7] = 43;
        assert_eq!(TiffExifData::parse(&bad_magic), Err(ExifError::BadMagic(43)));
    }

    #[test]
    fn test_minimal_ifd_both_orders() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let data = TiffExifData::try_parse(&exif(order, &[], &[])).unwrap();
            assert_eq!(data.byte_order, order);
            assert!(data.tags.is_empty());
        }
    }

    #[test]
    fn test_ifd0_out_of_bounds() {
        let mut data = exif(ByteOrder::LittleEndian, &[], &[]);
        data[8..12].copy_from_slice(&500u32.to_le_bytes());
        assert_eq!(TiffExifData::parse(&data), Err(ExifError::IfdOutOfBounds(500)));
    }

    #[test]
    fn test_inline_short_big_endian() {
        // Orientation = 6, SHORT, count 1, value in the first two bytes
        let entry = [0x01, 0x12, 0x00, 0x03, 0, 0, 0, 1, 0x00, 0x06, 0x00, 0x00];
        let data = TiffExifData::parse(&exif(ByteOrder::BigEndian, &[entry], &[])).unwrap();
        assert_eq!(data.tag(0x0112), Some(&ExifValue::Short(vec![6])));
    }

    #[test]
    fn test_offset_ascii_little_endian() {
        // Value lives right after IFD0: 8 + 2 + 12 + 4 = 26
        let entry = [0x0E, 0x01, 0x02, 0x00, 6, 0, 0, 0, 26, 0, 0, 0];
        let data =
            TiffExifData::parse(&exif(ByteOrder::LittleEndian, &[entry], b"Hello\0")).unwrap();
        assert_eq!(data.tag(0x010E).and_then(|v| v.as_ascii()), Some("Hello"));
    }

    #[test]
    fn test_bad_value_offset_drops_entry_only() {
        let bad = [0x0E, 0x01, 0x02, 0x00, 40, 0, 0, 0, 0xF0, 0, 0, 0];
        let good = [0x12, 0x01, 0x03, 0x00, 1, 0, 0, 0, 3, 0, 0, 0];
        let data = TiffExifData::parse(&exif(ByteOrder::LittleEndian, &[bad, good], &[])).unwrap();
        assert_eq!(data.tags.len(), 1);
        assert_eq!(data.tag(0x0112).and_then(|v| v.first_u32()), Some(3));
    }

    #[test]
    fn test_rationals_little_endian() {
        // 2 RATIONALs at offset 26
        let entry = [0x1A, 0x01, 0x05, 0x00, 2, 0, 0, 0, 26, 0, 0, 0];
        let mut tail = Vec::new();
        for v in [72u32, 1, 5, 0] {
            tail.extend_from_slice(&v.to_le_bytes());
        }
        let data = TiffExifData::parse(&exif(ByteOrder::LittleEndian, &[entry], &tail)).unwrap();
        let r = data.tag(0x011A).and_then(|v| v.as_rationals()).unwrap();
        assert_eq!(r[0].to_f64(), 72.0);
        assert_eq!(r[1].to_f64(), 0.0);
    }

    #[test]
    fn test_cyclic_sub_ifd_is_ignored() {
        // Exif IFD pointer back at IFD0
        let entry = [0x69, 0x87, 0x04, 0x00, 1, 0, 0, 0, 8, 0, 0, 0];
        let data = TiffExifData::parse(&exif(ByteOrder::LittleEndian, &[entry], &[])).unwrap();
        assert_eq!(data.tags.len(), 1);
        assert!(data.gps_tags.is_empty());
    }

    #[test]
    fn test_truncated_entry_list() {
        let mut data = exif(ByteOrder::LittleEndian, &[], &[]);
        // Claim 3 entries with no room for them
        data[12..14].copy_from_slice(&3u16.to_le_bytes());
        let parsed = TiffExifData::parse(&data).unwrap();
        assert!(parsed.tags.is_empty());
    }
}
