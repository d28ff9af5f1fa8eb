//! Reference implementation wrappers
//!
//! Load generated ICC profiles in lcms2 and moxcms and push pixels
//! through them.

/// Parse a profile with moxcms
pub fn moxcms_parse(icc: &[u8]) -> Result<moxcms::ColorProfile, String> {
    moxcms::ColorProfile::new_from_slice(icc).map_err(|e| format!("moxcms profile: {:?}", e))
}

/// Transform RGB8 pixels from `icc` to moxcms' built-in sRGB
pub fn moxcms_to_srgb(icc: &[u8], src_pixels: &[u8]) -> Result<Vec<u8>, String> {
    use moxcms::{ColorProfile, Layout, TransformOptions};

    let src_profile = moxcms_parse(icc)?;
    let dst_profile = ColorProfile::new_srgb();

    let transform = src_profile
        .create_transform_8bit(
            Layout::Rgb,
            &dst_profile,
            Layout::Rgb,
            TransformOptions::default(),
        )
        .map_err(|e| format!("moxcms transform: {:?}", e))?;

    let mut dst_pixels = vec![0u8; src_pixels.len()];
    transform
        .transform(src_pixels, &mut dst_pixels)
        .map_err(|e| format!("moxcms execute: {:?}", e))?;

    Ok(dst_pixels)
}

/// Parse a profile with lcms2
pub fn lcms2_parse(icc: &[u8]) -> Result<lcms2::Profile, String> {
    lcms2::Profile::new_icc(icc).map_err(|e| format!("lcms2 profile: {}", e))
}

/// Profile description as lcms2 reads it
pub fn lcms2_description(icc: &[u8]) -> Result<Option<String>, String> {
    let profile = lcms2_parse(icc)?;
    Ok(profile.info(lcms2::InfoType::Description, lcms2::Locale::none()))
}

/// Transform RGB8 pixels from `icc` to lcms2's built-in sRGB
pub fn lcms2_to_srgb(icc: &[u8], src_pixels: &[u8]) -> Result<Vec<u8>, String> {
    use lcms2::{Intent, PixelFormat, Profile, Transform};

    let src_profile = lcms2_parse(icc)?;
    let dst_profile = Profile::new_srgb();

    let transform = Transform::new(
        &src_profile,
        PixelFormat::RGB_8,
        &dst_profile,
        PixelFormat::RGB_8,
        Intent::RelativeColorimetric,
    )
    .map_err(|e| format!("lcms2 transform: {}", e))?;

    let mut dst_pixels = vec![0u8; src_pixels.len()];
    transform.transform_pixels(src_pixels, &mut dst_pixels);

    Ok(dst_pixels)
}

/// Largest per-channel difference between two RGB8 buffers
pub fn max_channel_diff(a: &[u8], b: &[u8]) -> u8 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}
