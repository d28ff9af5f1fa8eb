//! Transfer curves as they are written into ICC profiles
//!
//! Curves expressible in closed form use ICC parametric types. PQ and HLG
//! have no parametric equivalent and are sampled into lookup tables.

/// ICC Parametric Curve Type
///
/// The 'para' function types this crate writes (ICC.1:2022 Section 10.18)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametricCurveType {
    /// Type 0: Y = X^g
    Gamma,
    /// Type 3: Y = (aX + b)^g  if X >= d, else cX (sRGB-like)
    IEC61966_2_1,
}

impl ParametricCurveType {
    /// The function type code stored in a 'para' tag
    pub fn to_icc(self) -> u16 {
        match self {
            Self::Gamma => 0,
            Self::IEC61966_2_1 => 3,
        }
    }

    /// Get the number of parameters required
    pub fn param_count(self) -> usize {
        match self {
            Self::Gamma => 1,
            Self::IEC61966_2_1 => 5,
        }
    }
}

/// ICC Parametric Curve (decode direction: encoded → linear)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricCurve {
    pub curve_type: ParametricCurveType,
    pub g: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ParametricCurve {
    /// Create a simple gamma curve (type 0)
    pub fn gamma(g: f64) -> Self {
        Self {
            curve_type: ParametricCurveType::Gamma,
            g,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
        }
    }

    /// Create an sRGB transfer function curve (type 3)
    ///
    /// - Y = (X/12.92)              if X <= 0.04045
    /// - Y = ((X+0.055)/1.055)^2.4  if X > 0.04045
    pub fn srgb() -> Self {
        Self {
            curve_type: ParametricCurveType::IEC61966_2_1,
            g: 2.4,
            a: 1.0 / 1.055,
            b: 0.055 / 1.055,
            c: 1.0 / 12.92,
            d: 0.04045,
        }
    }

    /// Create a BT.709 transfer function curve (type 3)
    ///
    /// For decode: L = ((V + 0.099) / 1.099)^(1/0.45)  if V >= 0.081
    ///             L = V / 4.5                         if V < 0.081
    pub fn bt709() -> Self {
        Self {
            curve_type: ParametricCurveType::IEC61966_2_1,
            g: 1.0 / 0.45,
            a: 1.0 / 1.099,
            b: 0.099 / 1.099,
            c: 1.0 / 4.5,
            d: 0.081,
        }
    }

    /// Parameters in 'para' tag order, truncated to the type's count
    pub fn params(&self) -> Vec<f64> {
        let all = [self.g, self.a, self.b, self.c, self.d];
        all[..self.curve_type.param_count()].to_vec()
    }
}

// SMPTE ST 2084 constants
const PQ_M1: f64 = 2610.0 / 16384.0;
const PQ_M2: f64 = 2523.0 / 4096.0 * 128.0;
const PQ_C1: f64 = 3424.0 / 4096.0;
const PQ_C2: f64 = 2413.0 / 4096.0 * 32.0;
const PQ_C3: f64 = 2392.0 / 4096.0 * 32.0;

/// PQ EOTF: encoded signal → linear light relative to 10000 nits
pub fn pq_eotf(encoded: f64) -> f64 {
    let e = encoded.clamp(0.0, 1.0).powf(1.0 / PQ_M2);
    let num = (e - PQ_C1).max(0.0);
    let den = PQ_C2 - PQ_C3 * e;
    if den <= 0.0 {
        return 1.0;
    }
    (num / den).powf(1.0 / PQ_M1)
}

// ARIB STD-B67 constants
const HLG_A: f64 = 0.178_832_77;
const HLG_B: f64 = 0.284_668_92;
const HLG_C: f64 = 0.559_910_73;

/// HLG inverse OETF: encoded signal → scene linear light in [0, 1]
pub fn hlg_inverse_oetf(encoded: f64) -> f64 {
    let e = encoded.clamp(0.0, 1.0);
    if e <= 0.5 {
        e * e / 3.0
    } else {
        (((e - HLG_C) / HLG_A).exp() + HLG_B) / 12.0
    }
}

/// Sample a decode function into a 16-bit lookup table of `size` entries
pub fn sample_curve(size: usize, f: impl Fn(f64) -> f64) -> Vec<u16> {
    let last = size.saturating_sub(1).max(1) as f64;
    (0..size)
        .map(|i| {
            let v = f(i as f64 / last).clamp(0.0, 1.0);
            (v * 65535.0).round() as u16
        })
        .collect()
}
