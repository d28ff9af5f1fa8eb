//! Deterministic color encoding descriptions
//!
//! Descriptions take the form `RGB_D65_SRG_Rel_SRG` (grayscale drops the
//! primaries segment). A few well-known encodings are given a short alias
//! such as `DisplayP3`; aliases are looked up before the generic grammar.

use crate::encoding::{
    ColorEncoding, Primaries, RenderingIntent, TransferFunction, WhitePoint,
};

/// An RGB encoding with a D65 white point that has a well-known name
struct Alias {
    name: &'static str,
    primaries: Primaries,
    transfer_function: TransferFunction,
    /// None matches any intent
    rendering_intent: Option<RenderingIntent>,
}

static ALIASES: &[Alias] = &[
    Alias {
        name: "sRGB",
        primaries: Primaries::Srgb,
        transfer_function: TransferFunction::Srgb,
        rendering_intent: Some(RenderingIntent::Perceptual),
    },
    Alias {
        name: "DisplayP3",
        primaries: Primaries::P3,
        transfer_function: TransferFunction::Srgb,
        rendering_intent: None,
    },
    Alias {
        name: "Rec2100PQ",
        primaries: Primaries::Bt2100,
        transfer_function: TransferFunction::Pq,
        rendering_intent: Some(RenderingIntent::Relative),
    },
    Alias {
        name: "Rec2100HLG",
        primaries: Primaries::Bt2100,
        transfer_function: TransferFunction::Hlg,
        rendering_intent: Some(RenderingIntent::Relative),
    },
];

fn alias_for(encoding: &ColorEncoding) -> Option<&'static str> {
    let ColorEncoding::Rgb {
        white_point: WhitePoint::D65,
        primaries,
        transfer_function,
        rendering_intent,
    } = *encoding
    else {
        return None;
    };

    ALIASES
        .iter()
        .find(|alias| {
            alias.primaries == primaries
                && alias.transfer_function == transfer_function
                && alias
                    .rendering_intent
                    .is_none_or(|intent| intent == rendering_intent)
        })
        .map(|alias| alias.name)
}

/// Describe an encoding
pub fn describe(encoding: &ColorEncoding) -> String {
    if let Some(alias) = alias_for(encoding) {
        return alias.to_string();
    }

    match *encoding {
        ColorEncoding::Rgb {
            white_point,
            primaries,
            transfer_function,
            rendering_intent,
        } => format!(
            "RGB_{}_{}_{}_{}",
            white_point_code(white_point),
            primaries_code(primaries),
            intent_code(rendering_intent),
            transfer_code(transfer_function)
        ),
        ColorEncoding::Grayscale {
            white_point,
            transfer_function,
            rendering_intent,
        } => format!(
            "Gra_{}_{}_{}",
            white_point_code(white_point),
            intent_code(rendering_intent),
            transfer_code(transfer_function)
        ),
        ColorEncoding::Xyb { rendering_intent } => {
            format!("XYB_{}", intent_code(rendering_intent))
        }
    }
}

fn white_point_code(wp: WhitePoint) -> String {
    match wp {
        WhitePoint::D65 => "D65".to_string(),
        WhitePoint::E => "EER".to_string(),
        WhitePoint::Dci => "DCI".to_string(),
        WhitePoint::Custom { x, y } => format!("{};{}", coordinate(x), coordinate(y)),
    }
}

fn primaries_code(primaries: Primaries) -> String {
    match primaries {
        Primaries::Srgb => "SRG".to_string(),
        Primaries::Bt2100 => "202".to_string(),
        Primaries::P3 => "P3".to_string(),
        Primaries::Custom { red, green, blue } => format!(
            "{},{};{},{};{},{}",
            coordinate(red.0),
            coordinate(red.1),
            coordinate(green.0),
            coordinate(green.1),
            coordinate(blue.0),
            coordinate(blue.1)
        ),
    }
}

fn intent_code(intent: RenderingIntent) -> &'static str {
    match intent {
        RenderingIntent::Perceptual => "Per",
        RenderingIntent::Relative => "Rel",
        RenderingIntent::Saturation => "Sat",
        RenderingIntent::Absolute => "Abs",
    }
}

fn transfer_code(tf: TransferFunction) -> String {
    match tf {
        TransferFunction::Bt709 => "709".to_string(),
        TransferFunction::Linear => "Lin".to_string(),
        TransferFunction::Srgb => "SRG".to_string(),
        TransferFunction::Pq => "PeQ".to_string(),
        TransferFunction::Dci => "DCI".to_string(),
        TransferFunction::Hlg => "HLG".to_string(),
        TransferFunction::Gamma(g) => format!("g{:.5}", g),
    }
}

/// Six fractional digits, trailing zeros removed
fn coordinate(v: f64) -> String {
    let s = format!("{:.6}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
