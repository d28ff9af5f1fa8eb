//! Payload and container builders

use std::io::Cursor;

use anyhow::Result;
use jxlmeta_core::exif::{ByteOrder, TAG_GPS_IFD, TAG_IMAGE_DESCRIPTION};
use jxlmeta_core::metadata::JXL_SIGNATURE;

/// Field values understood by [`ExifBuilder`]
#[derive(Debug, Clone)]
pub enum Field {
    Byte(Vec<u8>),
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<(u32, u32)>),
}

impl Field {
    fn type_and_count(&self) -> (u16, u32) {
        match self {
            Field::Byte(v) => (1, v.len() as u32),
            Field::Ascii(s) => (2, s.len() as u32 + 1),
            Field::Short(v) => (3, v.len() as u32),
            Field::Long(v) => (4, v.len() as u32),
            Field::Rational(v) => (5, v.len() as u32),
        }
    }

    fn encode(&self, order: ByteOrder) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Field::Byte(v) => out.extend_from_slice(v),
            Field::Ascii(s) => {
                out.extend_from_slice(s.as_bytes());
                out.push(0);
            }
            Field::Short(v) => v.iter().for_each(|&x| out.extend(u16_bytes(order, x))),
            Field::Long(v) => v.iter().for_each(|&x| out.extend(u32_bytes(order, x))),
            Field::Rational(v) => v.iter().for_each(|&(n, d)| {
                out.extend(u32_bytes(order, n));
                out.extend(u32_bytes(order, d));
            }),
        }
        out
    }
}

fn u16_bytes(order: ByteOrder, v: u16) -> [u8; 2] {
    match order {
        ByteOrder::LittleEndian => v.to_le_bytes(),
        ByteOrder::BigEndian => v.to_be_bytes(),
    }
}

fn u32_bytes(order: ByteOrder, v: u32) -> [u8; 4] {
    match order {
        ByteOrder::LittleEndian => v.to_le_bytes(),
        ByteOrder::BigEndian => v.to_be_bytes(),
    }
}

/// Builds an Exif box payload: 4-byte offset prefix, TIFF header, IFD0
/// and an optional GPS IFD
#[derive(Debug, Clone)]
pub struct ExifBuilder {
    order: ByteOrder,
    ifd0: Vec<(u16, Field)>,
    gps: Vec<(u16, Field)>,
}

impl ExifBuilder {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            ifd0: Vec::new(),
            gps: Vec::new(),
        }
    }

    pub fn field(mut self, tag: u16, value: Field) -> Self {
        self.ifd0.push((tag, value));
        self
    }

    pub fn ascii(self, tag: u16, value: &str) -> Self {
        self.field(tag, Field::Ascii(value.to_string()))
    }

    pub fn short(self, tag: u16, value: u16) -> Self {
        self.field(tag, Field::Short(vec![value]))
    }

    pub fn gps_field(mut self, tag: u16, value: Field) -> Self {
        self.gps.push((tag, value));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let order = self.order;
        let mut ifd0 = self.ifd0.clone();
        if !self.gps.is_empty() {
            ifd0.push((TAG_GPS_IFD, Field::Long(vec![0])));
        }

        let ifd0_offset = 8u32;
        let gps_offset = ifd0_offset + ifd_len(order, &ifd0);
        if let Some((_, pointer)) = ifd0.iter_mut().find(|(tag, _)| *tag == TAG_GPS_IFD) {
            *pointer = Field::Long(vec![gps_offset]);
        }

        let mut tiff = match order {
            ByteOrder::LittleEndian => b"II".to_vec(),
            ByteOrder::BigEndian => b"MM".to_vec(),
        };
        tiff.extend(u16_bytes(order, 0x002A));
        tiff.extend(u32_bytes(order, ifd0_offset));
        tiff.extend(write_ifd(order, &ifd0, ifd0_offset));
        if !self.gps.is_empty() {
            tiff.extend(write_ifd(order, &self.gps, gps_offset));
        }

        let mut out = vec![0, 0, 0, 0];
        out.extend(tiff);
        out
    }
}

fn ifd_len(order: ByteOrder, entries: &[(u16, Field)]) -> u32 {
    let data: usize = entries
        .iter()
        .map(|(_, f)| f.encode(order).len())
        .filter(|&n| n > 4)
        .sum();
    (2 + 12 * entries.len() + 4 + data) as u32
}

/// IFD entries, next-IFD pointer (0) and the out-of-line value area
fn write_ifd(order: ByteOrder, entries: &[(u16, Field)], offset: u32) -> Vec<u8> {
    let mut table = u16_bytes(order, entries.len() as u16).to_vec();
    let mut area = Vec::new();
    let area_start = offset + 2 + 12 * entries.len() as u32 + 4;

    for (tag, field) in entries {
        let (field_type, count) = field.type_and_count();
        let value = field.encode(order);
        table.extend(u16_bytes(order, *tag));
        table.extend(u16_bytes(order, field_type));
        table.extend(u32_bytes(order, count));
        if value.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..value.len()].copy_from_slice(&value);
            table.extend(inline);
        } else {
            table.extend(u32_bytes(order, area_start + area.len() as u32));
            area.extend(value);
        }
    }
    table.extend([0, 0, 0, 0]);
    table.extend(area);
    table
}

/// Little-endian EXIF holding only an ImageDescription
pub fn minimal_exif(description: &str) -> Vec<u8> {
    ExifBuilder::new(ByteOrder::LittleEndian)
        .ascii(TAG_IMAGE_DESCRIPTION, description)
        .build()
}

/// XMP packet carrying `description` as dc:description
pub fn minimal_xmp(description: &str) -> Vec<u8> {
    format!(
        r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:dc="http://purl.org/dc/elements/1.1/">
      <dc:description>{description}</dc:description>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#
    )
    .into_bytes()
}

/// JUMBF superbox content: a labelled `jumd` box and a `json` box
pub fn minimal_jumbf(label: &str, content: &str) -> Vec<u8> {
    let mut jumd = vec![0u8; 16];
    jumd.push(0x03);
    jumd.extend_from_slice(label.as_bytes());
    jumd.push(0);

    let json = format!(r#"{{"test": "{content}"}}"#);
    let mut out = boxed(b"jumd", &jumd);
    out.extend(boxed(b"json", json.as_bytes()));
    out
}

/// One ISOBMFF box with a 32-bit size
pub fn boxed(fourcc: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(fourcc);
    out.extend_from_slice(payload);
    out
}

pub fn brotli_compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let params = brotli::enc::BrotliEncoderParams::default();
    brotli::BrotliCompress(&mut Cursor::new(data), &mut out, &params)?;
    Ok(out)
}

/// `brob` box wrapping a compressed box of type `inner`
pub fn brob(inner: &[u8; 4], payload: &[u8]) -> Result<Vec<u8>> {
    let mut content = inner.to_vec();
    content.extend(brotli_compress(payload)?);
    Ok(boxed(b"brob", &content))
}

/// Signature, `ftyp`, the given boxes and a trailing `jxlc` codestream
pub fn container(boxes: &[Vec<u8>]) -> Vec<u8> {
    let mut out = JXL_SIGNATURE.to_vec();
    out.extend(boxed(b"ftyp", b"jxl \0\0\0\0jxl "));
    for b in boxes {
        out.extend_from_slice(b);
    }
    out.extend(boxed(b"jxlc", &[0xFF, 0x0A, 0x00]));
    out
}
