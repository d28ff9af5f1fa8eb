//! XYZ and sf32 Tag Types
//!
//! See ICC.1:2022 Sections 10.31 (XYZ) and 10.22 (s15Fixed16Array)

use crate::color::Xyz;
use crate::icc::error::IccError;
use crate::icc::types::{S15Fixed16, TypeSignature, XyzNumber};
use crate::math::Matrix3x3;

/// Serialize a single-value 'XYZ ' tag
pub fn write_xyz(xyz: Xyz) -> Vec<u8> {
    let mut out = Vec::with_capacity(20);
    out.extend_from_slice(&TypeSignature::XYZ.to_bytes());
    out.extend_from_slice(&[0; 4]);
    XyzNumber::from_xyz(xyz).write_to(&mut out);
    out
}

/// Serialize a 3x3 matrix as an 'sf32' tag (row major), as used by 'chad'
pub fn write_sf32_matrix(matrix: &Matrix3x3) -> Vec<u8> {
    let mut out = Vec::with_capacity(44);
    out.extend_from_slice(&TypeSignature::SF32.to_bytes());
    out.extend_from_slice(&[0; 4]);
    for row in matrix.m {
        for v in row {
            out.extend_from_slice(&S15Fixed16::from_f64(v).to_be_bytes());
        }
    }
    out
}

/// Read the first XYZ value of an 'XYZ ' tag (type data only)
pub fn parse_xyz(data: &[u8]) -> Result<Xyz, IccError> {
    XyzNumber::from_bytes(data)
        .map(|n| n.to_xyz())
        .ok_or_else(|| IccError::CorruptedData("XYZ tag too small".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D50_XYZ;

    #[test]
    fn test_xyz_tag() {
        let tag = write_xyz(D50_XYZ);
        assert_eq!(tag.len(), 20);
        assert_eq!(&tag[0..4], b"XYZ ");
        let back = parse_xyz(&tag[8..]).unwrap();
        assert!(back.approx_eq(&D50_XYZ, 1e-4));
    }

    #[test]
    fn test_identity_chad() {
        let tag = write_sf32_matrix(&Matrix3x3::identity());
        assert_eq!(tag.len(), 44);
        assert_eq!(&tag[8..12], &[0, 1, 0, 0]);
        assert_eq!(&tag[12..16], &[0, 0, 0, 0]);
    }
}
