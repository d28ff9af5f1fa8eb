//! Curve Tag Types
//!
//! Two encodings for tone reproduction curves:
//! - curv: lookup table of u16 samples
//! - para: parametric curve with formula
//!
//! See ICC.1:2022 Sections 10.6 (curv) and 10.18 (para)

use crate::icc::types::{S15Fixed16, TypeSignature};
use crate::math::ParametricCurve;

/// Serialize a 'para' tag
pub fn write_para(curve: &ParametricCurve) -> Vec<u8> {
    let params = curve.params();
    let mut out = Vec::with_capacity(12 + params.len() * 4);
    out.extend_from_slice(&TypeSignature::PARA.to_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&curve.curve_type.to_icc().to_be_bytes());
    out.extend_from_slice(&[0; 2]);
    for p in params {
        out.extend_from_slice(&S15Fixed16::from_f64(p).to_be_bytes());
    }
    out
}

/// Serialize a 'curv' lookup table tag
pub fn write_curv(table: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + table.len() * 2);
    out.extend_from_slice(&TypeSignature::CURVE.to_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(table.len() as u32).to_be_bytes());
    for v in table {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out
}
