//! Chromatic Adaptation
//!
//! ICC v4 profiles store colorants relative to the D50 PCS, so encodings with
//! any other white point are adapted with the Bradford transform (the ICC
//! default) and the matrix is recorded in the 'chad' tag.
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::Xyz;
use crate::math::Matrix3x3;

/// Bradford matrix: XYZ → LMS (cone response)
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Bradford matrix: LMS → XYZ (inverse)
const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Compute the Bradford matrix adapting `src_white` to `dst_white`
///
/// The returned matrix M is used as: XYZ_dest = M × XYZ_src
pub fn bradford_matrix(src_white: Xyz, dst_white: Xyz) -> Matrix3x3 {
    let src_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(src_white.to_array());
    let dst_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(dst_white.to_array());

    let ratio = |i: usize| {
        if src_lms[i].abs() > 1e-10 {
            dst_lms[i] / src_lms[i]
        } else {
            1.0
        }
    };
    let scale = Matrix3x3::diagonal(ratio(0), ratio(1), ratio(2));

    // M = M_A^-1 × Scale × M_A
    BRADFORD_LMS_TO_XYZ.multiply(&scale.multiply(&BRADFORD_XYZ_TO_LMS))
}
