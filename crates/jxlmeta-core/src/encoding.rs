//! Structured color encodings
//!
//! A [`ColorEncoding`] describes a color space by enumerated properties
//! (white point, primaries, transfer function, rendering intent) rather
//! than by an ICC blob. Grayscale and XYB encodings carry no primaries,
//! so that state is unrepresentable rather than validated.

use crate::color;
use crate::error::{Error, Result};

/// Kind of color space an encoding describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceKind {
    Rgb,
    Grayscale,
    Xyb,
    Unknown,
}

/// White point of a color encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WhitePoint {
    /// CIE D65
    D65,
    /// Equal energy
    E,
    /// DCI-P3 theatrical white
    Dci,
    /// Custom chromaticity
    Custom { x: f64, y: f64 },
}

impl WhitePoint {
    /// CIE xy chromaticity
    pub fn chromaticity(&self) -> (f64, f64) {
        match *self {
            Self::D65 => (color::D65.x, color::D65.y),
            Self::E => (color::E.x, color::E.y),
            Self::Dci => (color::DCI.x, color::DCI.y),
            Self::Custom { x, y } => (x, y),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    fn same_as(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Custom { x: x1, y: y1 }, Self::Custom { x: x2, y: y2 }) => {
                same_f64(x1, x2) && same_f64(y1, y2)
            }
            _ => self == other,
        }
    }
}

/// RGB primaries of a color encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primaries {
    /// ITU-R BT.709 / sRGB
    Srgb,
    /// ITU-R BT.2100 (same as BT.2020)
    Bt2100,
    /// DCI-P3 primaries
    P3,
    /// Custom red, green and blue chromaticities
    Custom {
        red: (f64, f64),
        green: (f64, f64),
        blue: (f64, f64),
    },
}

impl Primaries {
    /// Red, green and blue xy chromaticities
    pub fn chromaticities(&self) -> [(f64, f64); 3] {
        match *self {
            Self::Srgb => [(0.640, 0.330), (0.300, 0.600), (0.150, 0.060)],
            Self::Bt2100 => [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
            Self::P3 => [(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)],
            Self::Custom { red, green, blue } => [red, green, blue],
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    fn same_as(&self, other: &Self) -> bool {
        if self.is_custom() && other.is_custom() {
            self.chromaticities()
                .iter()
                .zip(other.chromaticities())
                .all(|(&(x1, y1), (x2, y2))| same_f64(x1, x2) && same_f64(y1, y2))
        } else {
            self == other
        }
    }
}

/// Transfer function of a color encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferFunction {
    /// ITU-R BT.709
    Bt709,
    Linear,
    /// IEC 61966-2-1
    Srgb,
    /// SMPTE ST 2084 perceptual quantizer
    Pq,
    /// DCI gamma 2.6
    Dci,
    /// ARIB STD-B67 hybrid log-gamma
    Hlg,
    /// Pure power curve; the value is the encoding exponent, e.g. 0.45455
    Gamma(f64),
}

impl TransferFunction {
    pub fn is_hdr(&self) -> bool {
        matches!(self, Self::Pq | Self::Hlg)
    }

    fn same_as(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Gamma(a), Self::Gamma(b)) => same_f64(a, b),
            _ => self == other,
        }
    }
}

/// Rendering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderingIntent {
    Perceptual,
    #[default]
    Relative,
    Saturation,
    Absolute,
}

impl RenderingIntent {
    /// Value stored in the ICC header
    pub fn to_icc(self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::Relative => 1,
            Self::Saturation => 2,
            Self::Absolute => 3,
        }
    }

    pub fn from_icc(val: u32) -> Option<Self> {
        match val {
            0 => Some(Self::Perceptual),
            1 => Some(Self::Relative),
            2 => Some(Self::Saturation),
            3 => Some(Self::Absolute),
            _ => None,
        }
    }
}

/// A structured color encoding
///
/// [`ColorEncoding::from_parts`] is the validated constructor. Values built
/// from the variants directly are not checked; [`ColorEncoding::is_valid`]
/// reports whether they would have been accepted, and an invalid encoding
/// is never simple and has no ICC form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorEncoding {
    Rgb {
        white_point: WhitePoint,
        primaries: Primaries,
        transfer_function: TransferFunction,
        rendering_intent: RenderingIntent,
    },
    Grayscale {
        white_point: WhitePoint,
        transfer_function: TransferFunction,
        rendering_intent: RenderingIntent,
    },
    Xyb {
        rendering_intent: RenderingIntent,
    },
}

impl ColorEncoding {
    /// sRGB (or its grayscale counterpart) with relative intent
    pub fn srgb(grayscale: bool) -> Self {
        Self::d65_srgb_like(grayscale, TransferFunction::Srgb)
    }

    /// Linear-light sRGB (or grayscale) with relative intent
    pub fn linear_srgb(grayscale: bool) -> Self {
        Self::d65_srgb_like(grayscale, TransferFunction::Linear)
    }

    fn d65_srgb_like(grayscale: bool, transfer_function: TransferFunction) -> Self {
        if grayscale {
            Self::Grayscale {
                white_point: WhitePoint::D65,
                transfer_function,
                rendering_intent: RenderingIntent::Relative,
            }
        } else {
            Self::Rgb {
                white_point: WhitePoint::D65,
                primaries: Primaries::Srgb,
                transfer_function,
                rendering_intent: RenderingIntent::Relative,
            }
        }
    }

    /// Build an encoding from loose parts, checking they are consistent
    ///
    /// RGB requires primaries; grayscale and XYB reject them. XYB ignores
    /// the white point and transfer function.
    pub fn from_parts(
        kind: ColorSpaceKind,
        white_point: WhitePoint,
        primaries: Option<Primaries>,
        transfer_function: TransferFunction,
        rendering_intent: RenderingIntent,
    ) -> Result<Self> {
        let encoding = match (kind, primaries) {
            (ColorSpaceKind::Rgb, Some(primaries)) => Self::Rgb {
                white_point,
                primaries,
                transfer_function,
                rendering_intent,
            },
            (ColorSpaceKind::Rgb, None) => {
                return Err(Error::InvalidEncoding(
                    "RGB encoding requires primaries".to_string(),
                ));
            }
            (ColorSpaceKind::Grayscale, None) => Self::Grayscale {
                white_point,
                transfer_function,
                rendering_intent,
            },
            (ColorSpaceKind::Xyb, None) => return Ok(Self::Xyb { rendering_intent }),
            (ColorSpaceKind::Grayscale | ColorSpaceKind::Xyb, Some(_)) => {
                return Err(Error::InvalidEncoding(format!(
                    "{:?} encoding cannot have primaries",
                    kind
                )));
            }
            (ColorSpaceKind::Unknown, _) => {
                return Err(Error::InvalidEncoding(
                    "color space kind must be known".to_string(),
                ));
            }
        };

        encoding.validate()?;
        Ok(encoding)
    }

    /// Whether `from_parts` would accept this encoding's values
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Structural equality with NaN fields equal to themselves
    ///
    /// Agrees with `==` on every valid encoding, and unlike `==` it stays
    /// reflexive for encodings built directly with NaN values.
    pub fn same_as(&self, other: &Self) -> bool {
        fn same<T>(a: Option<T>, b: Option<T>, eq: fn(&T, &T) -> bool) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => eq(&a, &b),
                (None, None) => true,
                _ => false,
            }
        }

        self.kind() == other.kind()
            && self.rendering_intent() == other.rendering_intent()
            && same(self.white_point(), other.white_point(), WhitePoint::same_as)
            && same(self.primaries(), other.primaries(), Primaries::same_as)
            && same(
                self.transfer_function(),
                other.transfer_function(),
                TransferFunction::same_as,
            )
    }

    fn validate(&self) -> Result<()> {
        if let Some(WhitePoint::Custom { x, y }) = self.white_point() {
            check_chromaticity("white point", (x, y))?;
        }
        if let Some(Primaries::Custom { red, green, blue }) = self.primaries() {
            check_chromaticity("red primary", red)?;
            check_chromaticity("green primary", green)?;
            check_chromaticity("blue primary", blue)?;
        }
        if let Some(TransferFunction::Gamma(g)) = self.transfer_function() {
            if !(g.is_finite() && g > 0.0 && g <= 1.0) {
                return Err(Error::InvalidEncoding(format!(
                    "gamma exponent {} outside (0, 1]",
                    g
                )));
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> ColorSpaceKind {
        match self {
            Self::Rgb { .. } => ColorSpaceKind::Rgb,
            Self::Grayscale { .. } => ColorSpaceKind::Grayscale,
            Self::Xyb { .. } => ColorSpaceKind::Xyb,
        }
    }

    pub fn white_point(&self) -> Option<WhitePoint> {
        match *self {
            Self::Rgb { white_point, .. } | Self::Grayscale { white_point, .. } => {
                Some(white_point)
            }
            Self::Xyb { .. } => None,
        }
    }

    pub fn primaries(&self) -> Option<Primaries> {
        match *self {
            Self::Rgb { primaries, .. } => Some(primaries),
            _ => None,
        }
    }

    pub fn transfer_function(&self) -> Option<TransferFunction> {
        match *self {
            Self::Rgb {
                transfer_function, ..
            }
            | Self::Grayscale {
                transfer_function, ..
            } => Some(transfer_function),
            Self::Xyb { .. } => None,
        }
    }

    pub fn rendering_intent(&self) -> RenderingIntent {
        match *self {
            Self::Rgb {
                rendering_intent, ..
            }
            | Self::Grayscale {
                rendering_intent, ..
            }
            | Self::Xyb { rendering_intent } => rendering_intent,
        }
    }

    /// Number of color channels (XYB has three)
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Grayscale { .. } => 1,
            Self::Rgb { .. } | Self::Xyb { .. } => 3,
        }
    }

    /// Copy with a different transfer function; None for XYB
    pub fn with_transfer_function(&self, tf: TransferFunction) -> Option<Self> {
        match *self {
            Self::Rgb {
                white_point,
                primaries,
                rendering_intent,
                ..
            } => Some(Self::Rgb {
                white_point,
                primaries,
                transfer_function: tf,
                rendering_intent,
            }),
            Self::Grayscale {
                white_point,
                rendering_intent,
                ..
            } => Some(Self::Grayscale {
                white_point,
                transfer_function: tf,
                rendering_intent,
            }),
            Self::Xyb { .. } => None,
        }
    }

    /// Whether any property uses a custom (non-enumerated) value
    pub fn has_custom_values(&self) -> bool {
        self.white_point().is_some_and(|wp| wp.is_custom())
            || self.primaries().is_some_and(|p| p.is_custom())
    }
}

fn same_f64(a: f64, b: f64) -> bool {
    a == b || a.to_bits() == b.to_bits()
}

fn check_chromaticity(what: &str, (x, y): (f64, f64)) -> Result<()> {
    if x.is_finite() && y.is_finite() && (0.0..=1.0).contains(&x) && y > 0.0 && y <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidEncoding(format!(
            "{} chromaticity ({}, {}) out of range",
            what, x, y
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_factory() {
        let rgb = ColorEncoding::srgb(false);
        assert_eq!(rgb.kind(), ColorSpaceKind::Rgb);
        assert_eq!(rgb.white_point(), Some(WhitePoint::D65));
        assert_eq!(rgb.primaries(), Some(Primaries::Srgb));
        assert_eq!(rgb.transfer_function(), Some(TransferFunction::Srgb));
        assert_eq!(rgb.rendering_intent(), RenderingIntent::Relative);

        let gray = ColorEncoding::srgb(true);
        assert_eq!(gray.kind(), ColorSpaceKind::Grayscale);
        assert_eq!(gray.primaries(), None);
        assert_eq!(gray.channel_count(), 1);
    }

    #[test]
    fn test_linear_factory() {
        let lin = ColorEncoding::linear_srgb(false);
        assert_eq!(lin.transfer_function(), Some(TransferFunction::Linear));
        assert_eq!(lin.channel_count(), 3);
    }

    #[test]
    fn test_from_parts_rejects_gray_primaries() {
        let result = ColorEncoding::from_parts(
            ColorSpaceKind::Grayscale,
            WhitePoint::D65,
            Some(Primaries::Srgb),
            TransferFunction::Srgb,
            RenderingIntent::Relative,
        );
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_from_parts_requires_rgb_primaries() {
        let result = ColorEncoding::from_parts(
            ColorSpaceKind::Rgb,
            WhitePoint::D65,
            None,
            TransferFunction::Srgb,
            RenderingIntent::Relative,
        );
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_from_parts_unknown_kind() {
        let result = ColorEncoding::from_parts(
            ColorSpaceKind::Unknown,
            WhitePoint::D65,
            None,
            TransferFunction::Linear,
            RenderingIntent::Relative,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_validates_values() {
        let bad_gamma = ColorEncoding::from_parts(
            ColorSpaceKind::Grayscale,
            WhitePoint::D65,
            None,
            TransferFunction::Gamma(2.2),
            RenderingIntent::Relative,
        );
        assert!(bad_gamma.is_err());

        let bad_white = ColorEncoding::from_parts(
            ColorSpaceKind::Grayscale,
            WhitePoint::Custom { x: 0.3, y: 0.0 },
            None,
            TransferFunction::Linear,
            RenderingIntent::Relative,
        );
        assert!(bad_white.is_err());

        let ok = ColorEncoding::from_parts(
            ColorSpaceKind::Rgb,
            WhitePoint::D65,
            Some(Primaries::Bt2100),
            TransferFunction::Pq,
            RenderingIntent::Perceptual,
        )
        .unwrap();
        assert!(ok.transfer_function().unwrap().is_hdr());
    }

    #[test]
    fn test_with_transfer_function() {
        let srgb = ColorEncoding::srgb(false);
        let linear = srgb.with_transfer_function(TransferFunction::Linear).unwrap();
        assert_eq!(linear, ColorEncoding::linear_srgb(false));

        let xyb = ColorEncoding::Xyb {
            rendering_intent: RenderingIntent::Perceptual,
        };
        assert!(xyb.with_transfer_function(TransferFunction::Linear).is_none());
    }

    #[test]
    fn test_direct_variants_are_checked() {
        let zero_gamma = ColorEncoding::Grayscale {
            white_point: WhitePoint::D65,
            transfer_function: TransferFunction::Gamma(0.0),
            rendering_intent: RenderingIntent::Relative,
        };
        assert!(!zero_gamma.is_valid());

        let bad_primary = ColorEncoding::Rgb {
            white_point: WhitePoint::D65,
            primaries: Primaries::Custom {
                red: (0.64, 0.33),
                green: (0.3, 0.6),
                blue: (0.15, f64::NAN),
            },
            transfer_function: TransferFunction::Srgb,
            rendering_intent: RenderingIntent::Relative,
        };
        assert!(!bad_primary.is_valid());

        assert!(ColorEncoding::srgb(false).is_valid());
        assert!(ColorEncoding::Xyb { rendering_intent: RenderingIntent::Perceptual }.is_valid());
    }

    #[test]
    fn test_same_as_with_nan() {
        let nan_gamma = ColorEncoding::srgb(true)
            .with_transfer_function(TransferFunction::Gamma(f64::NAN))
            .unwrap();
        assert_ne!(nan_gamma, nan_gamma);
        assert!(nan_gamma.same_as(&nan_gamma));
        assert!(!nan_gamma.same_as(&ColorEncoding::srgb(true)));

        let nan_white = ColorEncoding::Grayscale {
            white_point: WhitePoint::Custom { x: f64::NAN, y: 0.33 },
            transfer_function: TransferFunction::Linear,
            rendering_intent: RenderingIntent::Relative,
        };
        assert!(nan_white.same_as(&nan_white));
        assert!(!nan_white.same_as(&ColorEncoding::linear_srgb(true)));
    }

    #[test]
    fn test_same_as_agrees_with_eq() {
        let srgb = ColorEncoding::srgb(false);
        let custom = ColorEncoding::Rgb {
            white_point: WhitePoint::Custom { x: 0.3127, y: 0.329 },
            primaries: Primaries::Srgb,
            transfer_function: TransferFunction::Srgb,
            rendering_intent: RenderingIntent::Relative,
        };
        // Custom values matching an enumerated one still differ
        assert!(!srgb.same_as(&custom) && !custom.same_as(&srgb));
        assert!(custom.same_as(&custom));

        let gamma = srgb.with_transfer_function(TransferFunction::Gamma(0.5)).unwrap();
        assert!(!gamma.same_as(&srgb));
        assert!(gamma.same_as(&srgb.with_transfer_function(TransferFunction::Gamma(0.5)).unwrap()));
    }

    #[test]
    fn test_rendering_intent_icc_values() {
        for v in 0..4 {
            assert_eq!(RenderingIntent::from_icc(v).unwrap().to_icc(), v);
        }
        assert_eq!(RenderingIntent::from_icc(4), None);
    }
}
