//! JPEG XL container scanning
//!
//! Box layout (ISO/IEC 18181-2, same header as ISO BMFF):
//! ```text
//! Size:       4 bytes (big-endian, includes the header)
//! Type:       4 bytes (FourCC)
//! [ExtSize]:  8 bytes (only when Size == 1)
//! ```
//!
//! Size 0 means the box runs to the end of the file. A `brob` box holds
//! the 4-byte type of the box it replaces followed by a Brotli stream.

use log::{debug, trace};

use super::box_type::MetadataBoxType;

/// Signature box that starts every JPEG XL container
pub const JXL_SIGNATURE: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, b'J', b'X', b'L', b' ', 0x0D, 0x0A, 0x87, 0x0A,
];

/// Marker that starts a bare codestream
pub const CODESTREAM_MARKER: [u8; 2] = [0xFF, 0x0A];

pub const BROB: &[u8; 4] = b"brob";

/// One metadata box found while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxEvent<'a> {
    pub box_type: MetadataBoxType,
    /// Payload as stored; still Brotli-compressed when `is_compressed`
    pub data: &'a [u8],
    pub is_compressed: bool,
}

/// Parsed box header
#[derive(Debug, Clone, Copy)]
struct BoxHeader {
    fourcc: [u8; 4],
    header_size: usize,
    /// Total size including the header
    size: usize,
}

fn read_box_header(data: &[u8]) -> Option<BoxHeader> {
    let head = data.get(..8)?;
    let size32 = u32::from_be_bytes([head[0], head[1], head[2], head[3]]);
    let fourcc = [head[4], head[5], head[6], head[7]];

    let (header_size, size) = match size32 {
        0 => (8, data.len()),
        1 => {
            let ext: [u8; 8] = data.get(8..16)?.try_into().ok()?;
            (16, usize::try_from(u64::from_be_bytes(ext)).ok()?)
        }
        n => (8, n as usize),
    };

    if size < header_size {
        return None;
    }
    Some(BoxHeader {
        fourcc,
        header_size,
        size,
    })
}

/// Iterator over the metadata boxes of a container
///
/// Stops at the first malformed or truncated box; boxes before it are
/// still reported.
#[derive(Debug, Clone)]
pub struct ContainerScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ContainerScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let pos = if data.starts_with(&JXL_SIGNATURE) {
            JXL_SIGNATURE.len()
        } else {
            if data.starts_with(&CODESTREAM_MARKER) {
                debug!("bare codestream has no metadata boxes");
            } else {
                debug!("not a JPEG XL container");
            }
            data.len()
        };
        Self { data, pos }
    }

    fn event(header: &BoxHeader, content: &'a [u8]) -> Option<BoxEvent<'a>> {
        if let Some(box_type) = MetadataBoxType::from_fourcc(&header.fourcc) {
            return Some(BoxEvent {
                box_type,
                data: content,
                is_compressed: false,
            });
        }

        if &header.fourcc == BROB {
            let inner: &[u8; 4] = content.get(..4)?.try_into().ok()?;
            let box_type = MetadataBoxType::from_fourcc(inner)?;
            return Some(BoxEvent {
                box_type,
                data: &content[4..],
                is_compressed: true,
            });
        }

        None
    }
}

impl<'a> Iterator for ContainerScanner<'a> {
    type Item = BoxEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let Some(header) = read_box_header(rest) else {
                debug!("malformed box header at {}", self.pos);
                self.pos = self.data.len();
                return None;
            };
            if header.size > rest.len() {
                debug!(
                    "box '{}' at {} overruns the file: {} > {}",
                    String::from_utf8_lossy(&header.fourcc),
                    self.pos,
                    header.size,
                    rest.len()
                );
                self.pos = self.data.len();
                return None;
            }

            trace!(
                "box '{}' at {} size {}",
                String::from_utf8_lossy(&header.fourcc),
                self.pos,
                header.size
            );
            self.pos += header.size;

            let content = &rest[header.header_size..header.size];
            if let Some(event) = Self::event(&header, content) {
                return Some(event);
            }
        }
        None
    }
}

/// Scan a container, collecting every metadata box event
pub fn scan(data: &[u8]) -> Vec<BoxEvent<'_>> {
    ContainerScanner::new(data).collect()
}
