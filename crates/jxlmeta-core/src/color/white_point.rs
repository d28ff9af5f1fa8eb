//! CIE Standard Illuminant White Points
//!
//! Stored as xy chromaticity so that the values match the ones color
//! encodings are specified with. Values are from CIE standards and ICC.1:2022.

use crate::color::Xyz;

/// A standard illuminant given by its chromaticity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illuminant {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE x chromaticity
    pub x: f64,
    /// CIE y chromaticity
    pub y: f64,
}

impl Illuminant {
    /// Create a new white point from chromaticity
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self { name, x, y }
    }

    /// XYZ with Y normalized to 1.0
    pub fn xyz(&self) -> Xyz {
        Xyz::from_xyy(self.x, self.y, 1.0)
    }
}

/// CIE Standard Illuminant D50
///
/// The ICC Profile Connection Space white. Written with the exact PCS
/// tristimulus values rather than derived from chromaticity.
pub const D50: Illuminant = Illuminant::new("D50", 0.3457, 0.3585);

/// ICC PCS illuminant as stored in profile headers (X, Y, Z)
pub const D50_XYZ: Xyz = Xyz::new(0.9642, 1.0, 0.8249);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Standard white point for sRGB, Display P3 and BT.2100.
pub const D65: Illuminant = Illuminant::new("D65", 0.3127, 0.3290);

/// DCI-P3 theatrical white point
///
/// Slightly greenish compared to D65.
pub const DCI: Illuminant = Illuminant::new("DCI", 0.314, 0.351);

/// CIE Standard Illuminant E (Equal Energy)
pub const E: Illuminant = Illuminant::new("E", 1.0 / 3.0, 1.0 / 3.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_xyz() {
        let xyz = D65.xyz();
        assert!((xyz.x - 0.9505).abs() < 0.001);
        assert!((xyz.y - 1.0).abs() < 1e-12);
        assert!((xyz.z - 1.0890).abs() < 0.001);
    }

    #[test]
    fn test_equal_energy() {
        let xyz = E.xyz();
        assert!(xyz.approx_eq(&Xyz::new(1.0, 1.0, 1.0), 1e-12));
    }

    #[test]
    fn test_d50_chromaticity_matches_pcs() {
        let (x, y) = D50_XYZ.to_xy();
        assert!((x - D50.x).abs() < 0.001);
        assert!((y - D50.y).abs() < 0.001);
    }
}
