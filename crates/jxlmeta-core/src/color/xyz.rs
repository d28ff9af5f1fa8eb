//! CIE XYZ Color Space
//!
//! ICC profiles store colorants and white points as XYZ relative to the
//! D50 Profile Connection Space.

/// CIE 1931 XYZ tristimulus values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    /// Luminance
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ value
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Create XYZ from xyY chromaticity coordinates
    #[inline]
    pub fn from_xyy(x: f64, y: f64, big_y: f64) -> Self {
        if y > 0.0 {
            Self {
                x: (x * big_y) / y,
                y: big_y,
                z: ((1.0 - x - y) * big_y) / y,
            }
        } else {
            Self::new(0.0, 0.0, 0.0)
        }
    }

    /// Convert to xy chromaticity coordinates
    #[inline]
    pub fn to_xy(&self) -> (f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum)
        } else {
            (0.0, 0.0)
        }
    }

    /// Check if approximately equal to another XYZ value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}
