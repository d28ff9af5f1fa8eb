//! Metadata box types

use serde::{Deserialize, Serialize};

/// Kind of auxiliary metadata box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataBoxType {
    /// `Exif`: TIFF structure behind a 4-byte offset
    Exif,
    /// `xml `: usually XMP
    Xml,
    /// `jumb`: JUMBF superbox
    Jumbf,
}

impl MetadataBoxType {
    pub const ALL: [Self; 3] = [Self::Exif, Self::Xml, Self::Jumbf];

    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<Self> {
        match fourcc {
            b"Exif" => Some(Self::Exif),
            b"xml " => Some(Self::Xml),
            b"jumb" => Some(Self::Jumbf),
            _ => None,
        }
    }

    pub fn fourcc(self) -> &'static [u8; 4] {
        match self {
            Self::Exif => b"Exif",
            Self::Xml => b"xml ",
            Self::Jumbf => b"jumb",
        }
    }
}

impl std::fmt::Display for MetadataBoxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exif => "EXIF",
            Self::Xml => "XML",
            Self::Jumbf => "JUMBF",
        };
        f.write_str(name)
    }
}
