//! Typed EXIF values

/// Unsigned EXIF RATIONAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifRational {
    pub numerator: u32,
    pub denominator: u32,
}

impl ExifRational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// numerator / denominator, or 0.0 when the denominator is zero
    pub fn to_f64(self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

/// Signed EXIF SRATIONAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifSignedRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl ExifSignedRational {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// numerator / denominator, or 0.0 when the denominator is zero
    pub fn to_f64(self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

/// Value of one IFD entry
#[derive(Debug, Clone, PartialEq)]
pub enum ExifValue {
    Byte(Vec<u8>),
    /// Text up to the first NUL
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<ExifRational>),
    Undefined(Vec<u8>),
    SLong(Vec<i32>),
    SRational(Vec<ExifSignedRational>),
}

impl ExifValue {
    /// First value of an unsigned integer entry
    pub fn first_u32(&self) -> Option<u32> {
        match self {
            Self::Byte(v) => v.first().map(|&b| b as u32),
            Self::Short(v) => v.first().map(|&s| s as u32),
            Self::Long(v) => v.first().copied(),
            _ => None,
        }
    }

    pub fn as_ascii(&self) -> Option<&str> {
        match self {
            Self::Ascii(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rationals(&self) -> Option<&[ExifRational]> {
        match self {
            Self::Rational(v) => Some(v),
            _ => None,
        }
    }
}
