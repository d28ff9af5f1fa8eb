//! RGB colorant computation
//!
//! Derives the RGB → XYZ matrix from primary and white point chromaticities,
//! then adapts it to the D50 PCS the way ICC v4 matrix/TRC profiles expect.

use crate::color::{D50_XYZ, Xyz};
use crate::math::{Matrix3x3, bradford_matrix};

/// RGB → XYZ matrix for the given chromaticities, relative to `white`
///
/// Returns None when the primaries are degenerate (collinear or y = 0).
pub fn rgb_to_xyz(
    red: (f64, f64),
    green: (f64, f64),
    blue: (f64, f64),
    white: (f64, f64),
) -> Option<Matrix3x3> {
    if [red.1, green.1, blue.1, white.1].iter().any(|y| *y <= 0.0) {
        return None;
    }

    let column = |(x, y): (f64, f64)| [x / y, 1.0, (1.0 - x - y) / y];
    let primaries = Matrix3x3::from_columns(column(red), column(green), column(blue));
    let white_xyz = Xyz::from_xyy(white.0, white.1, 1.0);
    let scale = primaries.inverse()?.multiply_vec(white_xyz.to_array());

    Some(primaries.multiply(&Matrix3x3::diagonal(scale[0], scale[1], scale[2])))
}

/// Colorant matrix adapted to D50; columns are the rXYZ, gXYZ and bXYZ tags
pub fn rgb_to_xyz_d50(
    red: (f64, f64),
    green: (f64, f64),
    blue: (f64, f64),
    white: (f64, f64),
) -> Option<Matrix3x3> {
    let to_xyz = rgb_to_xyz(red, green, blue, white)?;
    let adapt = bradford_matrix(Xyz::from_xyy(white.0, white.1, 1.0), D50_XYZ);
    Some(adapt.multiply(&to_xyz))
}
