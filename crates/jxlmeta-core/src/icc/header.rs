//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile information.
//! See ICC.1:2022 Section 7.2.

use super::error::IccError;
use super::types::XyzNumber;
use crate::color::D50_XYZ;
use crate::encoding::RenderingIntent;

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header size; also the smallest buffer the reader looks at
pub const HEADER_SIZE: usize = 128;

/// ICC Profile Header
///
/// Only the fields the reader and writer care about are kept; everything
/// else is written as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Profile version (major.minor.0.0)
    pub version: ProfileVersion,
    /// Device class (display, input, output, etc.)
    pub device_class: ProfileClass,
    /// Color space of data (RGB, CMYK, etc.)
    pub color_space: ColorSpace,
    /// Profile connection space (XYZ or Lab)
    pub pcs: ColorSpace,
    /// Rendering intent; None when the header holds an out-of-range value
    pub rendering_intent: Option<RenderingIntent>,
    /// PCS illuminant (should be D50)
    pub illuminant: XyzNumber,
}

impl IccHeader {
    /// Header for a v4.3 display profile of the given data color space
    pub fn display(color_space: ColorSpace, rendering_intent: RenderingIntent) -> Self {
        Self {
            size: 0,
            version: ProfileVersion { major: 4, minor: 3 },
            device_class: ProfileClass::Display,
            color_space,
            pcs: ColorSpace::Xyz,
            rendering_intent: Some(rendering_intent),
            illuminant: XyzNumber::from_xyz(D50_XYZ),
        }
    }

    /// Parse header from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < HEADER_SIZE {
            return Err(IccError::TooSmall {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let signature = be_u32(data, 36);
        if signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(signature));
        }

        Ok(Self {
            size: be_u32(data, 0),
            version: ProfileVersion {
                major: data[8],
                minor: data[9] >> 4,
            },
            device_class: ProfileClass::from_u32(be_u32(data, 12)),
            color_space: ColorSpace::from_u32(be_u32(data, 16)),
            pcs: ColorSpace::from_u32(be_u32(data, 20)),
            rendering_intent: RenderingIntent::from_icc(be_u32(data, 64)),
            illuminant: XyzNumber::from_bytes(&data[68..80]).unwrap_or_default(),
        })
    }

    /// Serialize to 128 bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.size.to_be_bytes());
        out[8] = self.version.major;
        out[9] = self.version.minor << 4;
        out[12..16].copy_from_slice(&self.device_class.to_u32().to_be_bytes());
        out[16..20].copy_from_slice(&self.color_space.to_u32().to_be_bytes());
        out[20..24].copy_from_slice(&self.pcs.to_u32().to_be_bytes());
        out[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        let intent = self.rendering_intent.unwrap_or_default().to_icc();
        out[64..68].copy_from_slice(&intent.to_be_bytes());

        let mut illuminant = Vec::with_capacity(12);
        self.illuminant.write_to(&mut illuminant);
        out[68..80].copy_from_slice(&illuminant);
        out
    }
}

fn be_u32(data: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// ICC Profile Version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    /// Color space conversion
    ColorSpace,
    /// Any other class
    Other(u32),
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Self {
        match &val.to_be_bytes() {
            b"scnr" => Self::Input,
            b"mntr" => Self::Display,
            b"prtr" => Self::Output,
            b"spac" => Self::ColorSpace,
            _ => Self::Other(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Input => u32::from_be_bytes(*b"scnr"),
            Self::Display => u32::from_be_bytes(*b"mntr"),
            Self::Output => u32::from_be_bytes(*b"prtr"),
            Self::ColorSpace => u32::from_be_bytes(*b"spac"),
            Self::Other(val) => *val,
        }
    }
}

/// ICC data / connection color space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Xyz,
    Lab,
    Rgb,
    Gray,
    Cmyk,
    /// Any other signature
    Other(u32),
}

impl ColorSpace {
    pub fn from_u32(val: u32) -> Self {
        match &val.to_be_bytes() {
            b"XYZ " => Self::Xyz,
            b"Lab " => Self::Lab,
            b"RGB " => Self::Rgb,
            b"GRAY" => Self::Gray,
            b"CMYK" => Self::Cmyk,
            _ => Self::Other(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Xyz => u32::from_be_bytes(*b"XYZ "),
            Self::Lab => u32::from_be_bytes(*b"Lab "),
            Self::Rgb => u32::from_be_bytes(*b"RGB "),
            Self::Gray => u32::from_be_bytes(*b"GRAY"),
            Self::Cmyk => u32::from_be_bytes(*b"CMYK"),
            Self::Other(val) => *val,
        }
    }

    /// Number of channels, if known
    pub fn channels(&self) -> Option<usize> {
        match self {
            Self::Gray => Some(1),
            Self::Xyz | Self::Lab | Self::Rgb => Some(3),
            Self::Cmyk => Some(4),
            Self::Other(_) => None,
        }
    }
}
