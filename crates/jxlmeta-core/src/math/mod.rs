//! Mathematical operations for ICC profile generation
//!
//! - 3x3 matrix operations for RGB → XYZ colorants
//! - Bradford chromatic adaptation to the D50 PCS
//! - Transfer curves (parametric and sampled)

pub mod chromatic_adaptation;
pub mod colorants;
pub mod matrix;
pub mod transfer;

pub use chromatic_adaptation::bradford_matrix;
pub use colorants::{rgb_to_xyz, rgb_to_xyz_d50};
pub use matrix::Matrix3x3;
pub use transfer::{ParametricCurve, ParametricCurveType, hlg_inverse_oetf, pq_eotf, sample_curve};
