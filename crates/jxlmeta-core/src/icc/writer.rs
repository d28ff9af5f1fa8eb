//! ICC profile generation for structured encodings
//!
//! Produces v4.3 display profiles: matrix/TRC for RGB, a single gray TRC
//! for grayscale. The 'desc' tag holds the encoding's description so a
//! generated profile can be recognised again.

use log::debug;

use super::header::{ColorSpace, HEADER_SIZE, IccHeader};
use super::tags::{write_curv, write_mluc, write_para, write_sf32_matrix, write_xyz};
use super::types::TagSignature;
use crate::color::{D50_XYZ, Xyz};
use crate::description::describe;
use crate::encoding::{ColorEncoding, TransferFunction};
use crate::math::{
    ParametricCurve, bradford_matrix, hlg_inverse_oetf, pq_eotf, rgb_to_xyz_d50, sample_curve,
};

const COPYRIGHT: &str = "CC0";

/// Samples in 'curv' tables for curves with no parametric form
pub const CURVE_TABLE_SIZE: usize = 4096;

/// Accumulates tag bodies and lays out the tag table
#[derive(Default)]
struct ProfileBuilder {
    /// Each tag refers to an index into `bodies`, so tags can share data
    tags: Vec<(TagSignature, usize)>,
    bodies: Vec<Vec<u8>>,
}

impl ProfileBuilder {
    fn add(&mut self, sig: TagSignature, body: Vec<u8>) -> usize {
        self.bodies.push(body);
        let index = self.bodies.len() - 1;
        self.tags.push((sig, index));
        index
    }

    fn share(&mut self, sig: TagSignature, index: usize) {
        self.tags.push((sig, index));
    }

    fn finish(self, mut header: IccHeader) -> Vec<u8> {
        let table_len = 4 + self.tags.len() * 12;
        let mut offsets = Vec::with_capacity(self.bodies.len());
        let mut cursor = HEADER_SIZE + table_len;
        for body in &self.bodies {
            offsets.push(cursor);
            cursor += padded(body.len());
        }

        header.size = cursor as u32;
        let mut out = Vec::with_capacity(cursor);
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        for (sig, index) in &self.tags {
            out.extend_from_slice(&sig.to_bytes());
            out.extend_from_slice(&(offsets[*index] as u32).to_be_bytes());
            out.extend_from_slice(&(self.bodies[*index].len() as u32).to_be_bytes());
        }
        for body in &self.bodies {
            out.extend_from_slice(body);
            out.resize(padded(out.len()), 0);
        }
        out
    }
}

fn padded(len: usize) -> usize {
    len.div_ceil(4) * 4
}

/// TRC tag body for a transfer function
fn trc_tag(tf: TransferFunction) -> Vec<u8> {
    match tf {
        TransferFunction::Srgb => write_para(&ParametricCurve::srgb()),
        TransferFunction::Bt709 => write_para(&ParametricCurve::bt709()),
        TransferFunction::Linear => write_para(&ParametricCurve::gamma(1.0)),
        TransferFunction::Dci => write_para(&ParametricCurve::gamma(2.6)),
        TransferFunction::Gamma(g) => write_para(&ParametricCurve::gamma(1.0 / g)),
        TransferFunction::Pq => write_curv(&sample_curve(CURVE_TABLE_SIZE, pq_eotf)),
        TransferFunction::Hlg => write_curv(&sample_curve(CURVE_TABLE_SIZE, hlg_inverse_oetf)),
    }
}

/// Generate an ICC profile for an encoding
///
/// Returns None for XYB, for encodings with custom white point or
/// primaries, and for encodings that fail [`ColorEncoding::is_valid`].
pub fn try_to_icc(encoding: &ColorEncoding) -> Option<Vec<u8>> {
    if !encoding.is_valid() {
        debug!("no ICC for invalid encoding {:?}", encoding);
        return None;
    }
    if encoding.has_custom_values() {
        debug!("no ICC for custom encoding {:?}", encoding);
        return None;
    }

    let (color_space, white_point, transfer_function) = match *encoding {
        ColorEncoding::Rgb {
            white_point,
            transfer_function,
            ..
        } => (ColorSpace::Rgb, white_point, transfer_function),
        ColorEncoding::Grayscale {
            white_point,
            transfer_function,
            ..
        } => (ColorSpace::Gray, white_point, transfer_function),
        ColorEncoding::Xyb { .. } => {
            debug!("no ICC for XYB encoding");
            return None;
        }
    };

    let (wx, wy) = white_point.chromaticity();
    let white = Xyz::from_xyy(wx, wy, 1.0);

    let mut builder = ProfileBuilder::default();
    builder.add(TagSignature::DESC, write_mluc(&describe(encoding)));
    builder.add(TagSignature::COPYRIGHT, write_mluc(COPYRIGHT));
    builder.add(TagSignature::MEDIA_WHITE, write_xyz(D50_XYZ));
    builder.add(
        TagSignature::CHAD,
        write_sf32_matrix(&bradford_matrix(white, D50_XYZ)),
    );

    if let Some(primaries) = encoding.primaries() {
        let [red, green, blue] = primaries.chromaticities();
        let colorants = rgb_to_xyz_d50(red, green, blue, (wx, wy))?;
        builder.add(
            TagSignature::RED_COLORANT,
            write_xyz(Xyz::from_array(colorants.column(0))),
        );
        builder.add(
            TagSignature::GREEN_COLORANT,
            write_xyz(Xyz::from_array(colorants.column(1))),
        );
        builder.add(
            TagSignature::BLUE_COLORANT,
            write_xyz(Xyz::from_array(colorants.column(2))),
        );

        let trc = builder.add(TagSignature::RED_TRC, trc_tag(transfer_function));
        builder.share(TagSignature::GREEN_TRC, trc);
        builder.share(TagSignature::BLUE_TRC, trc);
    } else {
        builder.add(TagSignature::GRAY_TRC, trc_tag(transfer_function));
    }

    let header = IccHeader::display(color_space, encoding.rendering_intent());
    Some(builder.finish(header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{ColorSpaceKind, Primaries, RenderingIntent, WhitePoint};
    use crate::icc::reader::{read_tag_table, try_get_description};

    #[test]
    fn test_srgb_profile_layout() {
        let icc = try_to_icc(&ColorEncoding::srgb(false)).unwrap();
        assert_eq!(&icc[36..40], b"acsp");
        assert_eq!(&icc[16..20], b"RGB ");
        assert_eq!(u32::from_be_bytes([icc[0], icc[1], icc[2], icc[3]]) as usize, icc.len());
        assert_eq!(icc.len() % 4, 0);

        let table = read_tag_table(&icc).unwrap();
        assert_eq!(table.len(), 10);
        for entry in &table {
            assert_eq!(entry.offset % 4, 0, "{} not aligned", entry.signature);
        }

        // TRCs share one body
        let offset_of = |sig: TagSignature| {
            table.iter().find(|e| e.signature == sig).map(|e| e.offset)
        };
        assert_eq!(offset_of(TagSignature::RED_TRC), offset_of(TagSignature::GREEN_TRC));
        assert_eq!(offset_of(TagSignature::RED_TRC), offset_of(TagSignature::BLUE_TRC));
    }

    #[test]
    fn test_gray_profile() {
        let icc = try_to_icc(&ColorEncoding::linear_srgb(true)).unwrap();
        assert_eq!(&icc[16..20], b"GRAY");
        let table = read_tag_table(&icc).unwrap();
        assert_eq!(table.len(), 5);
        assert!(table.iter().any(|e| e.signature == TagSignature::GRAY_TRC));
        assert!(!table.iter().any(|e| e.signature == TagSignature::RED_COLORANT));
    }

    #[test]
    fn test_description_roundtrip() {
        let encodings = [
            ColorEncoding::srgb(false),
            ColorEncoding::linear_srgb(false),
            ColorEncoding::srgb(true),
            ColorEncoding::from_parts(
                ColorSpaceKind::Rgb,
                WhitePoint::D65,
                Some(Primaries::Bt2100),
                TransferFunction::Pq,
                RenderingIntent::Perceptual,
            )
            .unwrap(),
            ColorEncoding::from_parts(
                ColorSpaceKind::Rgb,
                WhitePoint::Dci,
                Some(Primaries::P3),
                TransferFunction::Dci,
                RenderingIntent::Saturation,
            )
            .unwrap(),
        ];

        for encoding in encodings {
            let icc = try_to_icc(&encoding).unwrap();
            assert_eq!(try_get_description(&icc), Some(describe(&encoding)));
        }
    }

    #[test]
    fn test_intent_in_header() {
        let encoding = ColorEncoding::from_parts(
            ColorSpaceKind::Grayscale,
            WhitePoint::E,
            None,
            TransferFunction::Gamma(0.5),
            RenderingIntent::Absolute,
        )
        .unwrap();
        let icc = try_to_icc(&encoding).unwrap();
        assert_eq!(&icc[64..68], &[0, 0, 0, 3]);
    }

    #[test]
    fn test_unrepresentable_encodings() {
        let xyb = ColorEncoding::Xyb {
            rendering_intent: RenderingIntent::Perceptual,
        };
        assert!(try_to_icc(&xyb).is_none());

        let custom = ColorEncoding::Grayscale {
            white_point: WhitePoint::Custom { x: 0.3, y: 0.3 },
            transfer_function: TransferFunction::Linear,
            rendering_intent: RenderingIntent::Relative,
        };
        assert!(try_to_icc(&custom).is_none());

        for gamma in [0.0, -0.5, 2.2, f64::NAN, f64::INFINITY] {
            let direct = ColorEncoding::Grayscale {
                white_point: WhitePoint::D65,
                transfer_function: TransferFunction::Gamma(gamma),
                rendering_intent: RenderingIntent::Relative,
            };
            assert!(try_to_icc(&direct).is_none(), "gamma {}", gamma);
        }
    }
}
