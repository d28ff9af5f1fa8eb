//! Color primitives
//!
//! This module provides:
//! - CIE XYZ values
//! - Standard white point chromaticities

pub mod white_point;
pub mod xyz;

pub use white_point::{D50, D50_XYZ, D65, DCI, E, Illuminant};
pub use xyz::Xyz;
