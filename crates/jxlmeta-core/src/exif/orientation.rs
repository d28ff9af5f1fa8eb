//! EXIF orientation

/// Orientation codes 1 to 8 as stored in tag 0x0112
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Identity,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    AntiTranspose,
    Rotate270,
}

impl Orientation {
    pub fn from_exif(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::Identity,
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::AntiTranspose,
            8 => Self::Rotate270,
            _ => return None,
        })
    }

    pub fn to_exif(self) -> u16 {
        match self {
            Self::Identity => 1,
            Self::FlipHorizontal => 2,
            Self::Rotate180 => 3,
            Self::FlipVertical => 4,
            Self::Transpose => 5,
            Self::Rotate90 => 6,
            Self::AntiTranspose => 7,
            Self::Rotate270 => 8,
        }
    }

    /// Width and height trade places when this orientation is applied
    pub fn swaps_dimensions(self) -> bool {
        self.to_exif() >= 5
    }
}
