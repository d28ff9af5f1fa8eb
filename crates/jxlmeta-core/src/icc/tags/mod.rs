//! ICC Profile Tag Types
//!
//! Every tag starts with a 4-byte type signature and 4 reserved bytes,
//! followed by type-specific data. Only the types needed to write
//! matrix/TRC profiles and to read descriptions are handled here.
//!
//! See ICC.1:2022 Section 10.

mod curves;
mod text;
mod xyz;

pub use curves::{write_curv, write_para};
pub use text::{parse_desc, parse_mluc, parse_text, write_mluc};
pub use xyz::{parse_xyz, write_sf32_matrix, write_xyz};

use super::error::IccError;
use super::types::TypeSignature;

/// Decode a text-bearing tag ('mluc', 'desc' or 'text')
///
/// `data` starts at the tag's type signature.
pub fn parse_text_tag(data: &[u8], tag_sig: u32) -> Result<String, IccError> {
    if data.len() < 8 {
        return Err(IccError::CorruptedData(
            "Tag data too small for header".to_string(),
        ));
    }

    let type_sig = TypeSignature(u32::from_be_bytes([data[0], data[1], data[2], data[3]]));
    let type_data = &data[8..];

    match type_sig {
        TypeSignature::MLUC => parse_mluc(type_data),
        TypeSignature::DESC => parse_desc(type_data),
        TypeSignature::TEXT => parse_text(type_data),
        _ => Err(IccError::UnsupportedTagType {
            tag: tag_sig,
            type_sig: type_sig.0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_tag_dispatch() {
        let mluc = write_mluc("Display");
        assert_eq!(parse_text_tag(&mluc, 0).unwrap(), "Display");

        let mut text = b"text\0\0\0\0".to_vec();
        text.extend_from_slice(b"Plain\0");
        assert_eq!(parse_text_tag(&text, 0).unwrap(), "Plain");

        let xyz = write_xyz(crate::color::D50_XYZ);
        assert!(matches!(
            parse_text_tag(&xyz, 0),
            Err(IccError::UnsupportedTagType { .. })
        ));
        assert!(parse_text_tag(b"mluc", 0).is_err());
    }
}
