//! Color profiles: a structured encoding or an opaque ICC blob
//!
//! Decoders report an embedded profile either as a [`ColorEncoding`] or as
//! raw ICC bytes. [`ColorProfile`] covers both and answers the questions
//! callers ask of either form.

use std::borrow::Cow;

use crate::description::describe;
use crate::encoding::{ColorEncoding, ColorSpaceKind, TransferFunction};
use crate::error::{Error, Result};
use crate::icc::{self, ColorSpace};

/// A color profile as reported by a decoder
#[derive(Debug, Clone, PartialEq)]
pub enum ColorProfile {
    /// Structured encoding
    Simple(ColorEncoding),
    /// Raw ICC profile bytes
    Icc(Vec<u8>),
}

impl ColorProfile {
    /// sRGB, or the sRGB-curve grayscale equivalent
    pub fn srgb(grayscale: bool) -> Self {
        Self::Simple(ColorEncoding::srgb(grayscale))
    }

    /// Linear-light sRGB, or its grayscale equivalent
    pub fn linear_srgb(grayscale: bool) -> Self {
        Self::Simple(ColorEncoding::linear_srgb(grayscale))
    }

    /// Wrap externally supplied ICC bytes
    pub fn from_icc(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Icc(bytes.into())
    }

    /// The structured encoding, if this is not ICC-backed
    pub fn encoding(&self) -> Option<&ColorEncoding> {
        match self {
            Self::Simple(encoding) => Some(encoding),
            Self::Icc(_) => None,
        }
    }

    /// The ICC bytes, if this is ICC-backed
    pub fn icc_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Simple(_) => None,
            Self::Icc(bytes) => Some(bytes),
        }
    }

    fn icc_color_space(&self) -> Option<ColorSpace> {
        self.icc_bytes()
            .and_then(icc::try_read_header)
            .map(|header| header.color_space)
    }

    /// Color space kind; ICC profiles are projected from their header
    pub fn color_space(&self) -> ColorSpaceKind {
        match self {
            Self::Simple(encoding) => encoding.kind(),
            Self::Icc(_) => match self.icc_color_space() {
                Some(ColorSpace::Rgb) => ColorSpaceKind::Rgb,
                Some(ColorSpace::Gray) => ColorSpaceKind::Grayscale,
                _ => ColorSpaceKind::Unknown,
            },
        }
    }

    /// 1 for grayscale, 3 for RGB and XYB, 4 for CMYK ICC profiles
    ///
    /// ICC profiles with an unknown or unreadable color space report 3.
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Simple(encoding) => encoding.channel_count(),
            Self::Icc(_) => self
                .icc_color_space()
                .and_then(|cs| cs.channels())
                .unwrap_or(3),
        }
    }

    pub fn is_rgb(&self) -> bool {
        self.color_space() == ColorSpaceKind::Rgb
    }

    pub fn is_grayscale(&self) -> bool {
        self.color_space() == ColorSpaceKind::Grayscale
    }

    pub fn is_cmyk(&self) -> bool {
        self.icc_color_space() == Some(ColorSpace::Cmyk)
    }

    pub fn is_icc(&self) -> bool {
        matches!(self, Self::Icc(_))
    }

    /// Structured RGB or grayscale with only enumerated values
    pub fn is_simple(&self) -> bool {
        match self {
            Self::Simple(encoding) => {
                !matches!(encoding, ColorEncoding::Xyb { .. })
                    && !encoding.has_custom_values()
                    && encoding.is_valid()
            }
            Self::Icc(_) => false,
        }
    }

    /// Whether a decoder can be asked to produce pixels in this profile
    pub fn can_output_to(&self) -> bool {
        match self {
            Self::Simple(ColorEncoding::Xyb { .. }) | Self::Icc(_) => false,
            Self::Simple(encoding) => encoding.is_valid(),
        }
    }

    fn transfer_function(&self) -> Option<TransferFunction> {
        self.encoding().and_then(|e| e.transfer_function())
    }

    pub fn is_linear(&self) -> bool {
        self.transfer_function() == Some(TransferFunction::Linear)
    }

    pub fn is_hdr(&self) -> bool {
        self.transfer_function().is_some_and(|tf| tf.is_hdr())
    }

    pub fn is_pq(&self) -> bool {
        self.transfer_function() == Some(TransferFunction::Pq)
    }

    pub fn is_hlg(&self) -> bool {
        self.transfer_function() == Some(TransferFunction::Hlg)
    }

    pub fn is_srgb_encoding(&self) -> bool {
        self.transfer_function() == Some(TransferFunction::Srgb)
    }

    /// Structural equality for encodings, byte equality for ICC profiles
    ///
    /// A structured profile never equals an ICC-backed one. Reflexive even
    /// for encodings holding NaN (see [`ColorEncoding::same_as`]).
    pub fn same_color_encoding(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Simple(a), Self::Simple(b)) => a.same_as(b),
            (Self::Icc(a), Self::Icc(b)) => a == b,
            _ => false,
        }
    }

    /// Copy with the transfer function replaced by linear
    pub fn with_linear_transfer_function(&self) -> Result<Self> {
        match self {
            Self::Simple(encoding) => encoding
                .with_transfer_function(TransferFunction::Linear)
                .map(Self::Simple)
                .ok_or_else(|| {
                    Error::UnsupportedConversion(
                        "XYB encoding has no transfer function".to_string(),
                    )
                }),
            Self::Icc(_) => Err(Error::UnsupportedConversion(
                "ICC profile cannot be linearized".to_string(),
            )),
        }
    }

    /// ICC bytes for this profile
    ///
    /// ICC-backed profiles return their bytes unchanged; simple encodings
    /// are converted. None when no ICC equivalent is generated.
    pub fn try_as_icc(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Self::Simple(encoding) => icc::try_to_icc(encoding).map(Cow::Owned),
            Self::Icc(bytes) => Some(Cow::Borrowed(bytes)),
        }
    }

    /// Description grammar for encodings, 'desc' text for ICC profiles
    pub fn description(&self) -> Option<String> {
        match self {
            Self::Simple(encoding) => Some(describe(encoding)),
            Self::Icc(bytes) => icc::try_get_description(bytes),
        }
    }
}

impl From<ColorEncoding> for ColorProfile {
    fn from(encoding: ColorEncoding) -> Self {
        Self::Simple(encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Primaries, RenderingIntent, WhitePoint};

    fn cmyk_icc() -> Vec<u8> {
        let mut icc = icc::try_to_icc(&ColorEncoding::srgb(false)).unwrap();
        icc[16..20].copy_from_slice(b"CMYK");
        icc
    }

    #[test]
    fn test_srgb_queries() {
        let p = ColorProfile::srgb(false);
        assert_eq!(p.channel_count(), 3);
        assert!(p.is_rgb());
        assert!(!p.is_grayscale());
        assert!(!p.is_cmyk());
        assert!(!p.is_icc());
        assert!(p.is_simple());
        assert!(p.is_srgb_encoding());
        assert!(!p.is_linear());
        assert!(!p.is_hdr());
        assert!(p.can_output_to());
    }

    #[test]
    fn test_linear_gray_queries() {
        let p = ColorProfile::linear_srgb(true);
        assert_eq!(p.channel_count(), 1);
        assert!(p.is_grayscale());
        assert!(p.is_linear());
        assert!(!p.is_srgb_encoding());
    }

    #[test]
    fn test_hdr_predicates() {
        let pq = ColorProfile::from(
            ColorEncoding::from_parts(
                ColorSpaceKind::Rgb,
                WhitePoint::D65,
                Some(Primaries::Bt2100),
                TransferFunction::Pq,
                RenderingIntent::Perceptual,
            )
            .unwrap(),
        );
        assert!(pq.is_hdr());
        assert!(pq.is_pq());
        assert!(!pq.is_hlg());

        let hlg = pq.encoding().unwrap().with_transfer_function(TransferFunction::Hlg);
        let hlg = ColorProfile::from(hlg.unwrap());
        assert!(hlg.is_hdr());
        assert!(hlg.is_hlg());
    }

    #[test]
    fn test_icc_projection() {
        let rgb = ColorProfile::from_icc(icc::try_to_icc(&ColorEncoding::srgb(false)).unwrap());
        assert!(rgb.is_icc());
        assert!(rgb.is_rgb());
        assert!(!rgb.is_simple());
        assert!(!rgb.can_output_to());
        // Transfer predicates do not look inside ICC data
        assert!(!rgb.is_srgb_encoding());
        assert_eq!(rgb.description().as_deref(), Some("RGB_D65_SRG_Rel_SRG"));

        let cmyk = ColorProfile::from_icc(cmyk_icc());
        assert!(cmyk.is_cmyk());
        assert_eq!(cmyk.channel_count(), 4);
        assert_eq!(cmyk.color_space(), ColorSpaceKind::Unknown);

        let junk = ColorProfile::from_icc(vec![1, 2, 3]);
        assert_eq!(junk.color_space(), ColorSpaceKind::Unknown);
        assert_eq!(junk.description(), None);
    }

    #[test]
    fn test_same_color_encoding() {
        let a = ColorProfile::srgb(false);
        let b = ColorProfile::srgb(false);
        assert!(a.same_color_encoding(&a));
        assert!(a.same_color_encoding(&b) && b.same_color_encoding(&a));

        assert!(!a.same_color_encoding(&ColorProfile::linear_srgb(false)));
        assert!(!a.same_color_encoding(&ColorProfile::srgb(true)));

        let as_icc = ColorProfile::from_icc(a.try_as_icc().unwrap().into_owned());
        assert!(!a.same_color_encoding(&as_icc));
        assert!(as_icc.same_color_encoding(&as_icc.clone()));
        assert!(!as_icc.same_color_encoding(&ColorProfile::from_icc(cmyk_icc())));
    }

    fn rgb_profile(white_point: WhitePoint, primaries: Primaries) -> ColorProfile {
        ColorProfile::Simple(ColorEncoding::Rgb {
            white_point,
            primaries,
            transfer_function: TransferFunction::Srgb,
            rendering_intent: RenderingIntent::Relative,
        })
    }

    #[test]
    fn test_same_color_encoding_single_field_differences() {
        let base = rgb_profile(WhitePoint::D65, Primaries::Srgb);
        let variants = [
            rgb_profile(WhitePoint::Dci, Primaries::Srgb),
            rgb_profile(WhitePoint::E, Primaries::Srgb),
            rgb_profile(WhitePoint::D65, Primaries::P3),
            rgb_profile(WhitePoint::D65, Primaries::Bt2100),
            rgb_profile(WhitePoint::Custom { x: 0.3127, y: 0.329 }, Primaries::Srgb),
        ];

        assert!(base.same_color_encoding(&base));
        for other in &variants {
            assert!(other.same_color_encoding(other));
            assert!(!base.same_color_encoding(other), "{:?}", other);
            assert!(!other.same_color_encoding(&base), "{:?}", other);
        }

        let gray_d65 = ColorProfile::srgb(true);
        let gray_dci = ColorProfile::Simple(ColorEncoding::Grayscale {
            white_point: WhitePoint::Dci,
            transfer_function: TransferFunction::Srgb,
            rendering_intent: RenderingIntent::Relative,
        });
        assert!(!gray_d65.same_color_encoding(&gray_dci));
        assert!(!gray_dci.same_color_encoding(&gray_d65));

        let perceptual = ColorProfile::Simple(ColorEncoding::Rgb {
            white_point: WhitePoint::D65,
            primaries: Primaries::Srgb,
            transfer_function: TransferFunction::Srgb,
            rendering_intent: RenderingIntent::Perceptual,
        });
        assert!(!base.same_color_encoding(&perceptual));
        assert!(!perceptual.same_color_encoding(&base));
    }

    #[test]
    fn test_directly_built_invalid_encodings() {
        let zero_gamma = ColorProfile::Simple(ColorEncoding::Grayscale {
            white_point: WhitePoint::D65,
            transfer_function: TransferFunction::Gamma(0.0),
            rendering_intent: RenderingIntent::Relative,
        });
        assert!(!zero_gamma.is_simple());
        assert!(!zero_gamma.can_output_to());
        assert!(zero_gamma.try_as_icc().is_none());

        let nan_gamma = ColorProfile::Simple(ColorEncoding::Rgb {
            white_point: WhitePoint::D65,
            primaries: Primaries::Srgb,
            transfer_function: TransferFunction::Gamma(f64::NAN),
            rendering_intent: RenderingIntent::Relative,
        });
        assert!(nan_gamma.same_color_encoding(&nan_gamma));
        assert!(nan_gamma.same_color_encoding(&nan_gamma.clone()));
        assert!(!nan_gamma.same_color_encoding(&ColorProfile::srgb(false)));
        assert!(!nan_gamma.is_simple());
        assert!(nan_gamma.try_as_icc().is_none());
    }

    #[test]
    fn test_with_linear_transfer_function() {
        let linear = ColorProfile::srgb(false).with_linear_transfer_function().unwrap();
        assert!(linear.same_color_encoding(&ColorProfile::linear_srgb(false)));

        let icc = ColorProfile::from_icc(cmyk_icc());
        assert!(matches!(
            icc.with_linear_transfer_function(),
            Err(Error::UnsupportedConversion(_))
        ));

        let xyb = ColorProfile::Simple(ColorEncoding::Xyb {
            rendering_intent: RenderingIntent::Perceptual,
        });
        assert!(xyb.with_linear_transfer_function().is_err());
        assert!(!xyb.is_simple());
        assert!(!xyb.can_output_to());
    }

    #[test]
    fn test_custom_encoding_flags() {
        let custom = ColorProfile::Simple(ColorEncoding::Grayscale {
            white_point: WhitePoint::Custom { x: 0.3, y: 0.3 },
            transfer_function: TransferFunction::Linear,
            rendering_intent: RenderingIntent::Relative,
        });
        assert!(!custom.is_simple());
        assert!(custom.can_output_to());
        assert!(custom.try_as_icc().is_none());
    }

    #[test]
    fn test_try_as_icc_passthrough() {
        let bytes = cmyk_icc();
        let profile = ColorProfile::from_icc(bytes.clone());
        assert_eq!(profile.try_as_icc().as_deref(), Some(bytes.as_slice()));
    }
}
