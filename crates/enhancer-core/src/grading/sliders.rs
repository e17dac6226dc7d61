//! Slider-based adjustments (brightness, contrast, saturation).
//!
//! Each slider value here is already centered: `0.0` is the neutral setting.
//! All functions take and return linear-light RGB.

use std::f64::consts::FRAC_PI_4;

use crate::color_management::hsv::{hsv_to_rgb, rgb_to_hsv, scale_saturation};
use crate::color_management::transfer::GammaCodec;
use crate::image::RgbImage;

/// Apply brightness as a power curve on linear values.
///
/// ```text
/// out = in ^ (1 / (1 + scale × b))
/// ```
///
/// `b = 0` produces no change. For `b <= −1/scale` the exponent is infinite
/// or negative and the result follows IEEE `powf`.
pub fn apply_brightness(rgb: [f64; 3], brightness: f64, scale: f64) -> [f64; 3] {
    let exponent = 1.0 / (1.0 + scale * brightness);
    rgb.map(|c| c.powf(exponent))
}

/// Slope of the contrast line for a centered contrast value.
///
/// `tan((c + 1) × π/4)`: 0 at `c = −1`, 1 at `c = 0`, diverging as `c → 1`.
pub fn contrast_slope(contrast: f64) -> f64 {
    ((contrast + 1.0) * FRAC_PI_4).tan()
}

/// Apply pivot contrast around display mid-gray.
///
/// The pixel is encoded for display, stretched around 0.5, floored at zero
/// (no upper clamp), and decoded back to linear light.
///
/// ```text
/// v   = encode(in)
/// v'  = max(k × (v − 0.5) + 0.5, 0)     k = contrast_slope(c)
/// out = decode(v')
/// ```
pub fn apply_contrast(rgb: [f64; 3], contrast: f64, codec: GammaCodec) -> [f64; 3] {
    let k = contrast_slope(contrast);
    rgb.map(|c| {
        let encoded = codec.to_encoded(c);
        let stretched = floor_at_zero(k * (encoded - 0.5) + 0.5);
        codec.to_linear(stretched)
    })
}

/// Scale HSV saturation by `1 + s`, clipped to `[0, 1]`.
///
/// Hue and value are carried through the HSV round trip untouched.
pub fn apply_saturation(rgb: [f64; 3], saturation: f64) -> [f64; 3] {
    hsv_to_rgb(scale_saturation(rgb_to_hsv(rgb), saturation + 1.0))
}

/// Apply brightness to every pixel of a linear-light image.
pub fn brightness(image: &RgbImage, brightness: f64, scale: f64) -> RgbImage {
    image.map_pixels(|px| apply_brightness(px, brightness, scale))
}

/// Apply pivot contrast to every pixel of a linear-light image.
pub fn contrast(image: &RgbImage, contrast: f64, codec: GammaCodec) -> RgbImage {
    image.map_pixels(|px| apply_contrast(px, contrast, codec))
}

/// Apply saturation scaling to every pixel of a linear-light image.
pub fn saturation(image: &RgbImage, saturation: f64) -> RgbImage {
    image.map_pixels(|px| apply_saturation(px, saturation))
}

// Unlike `f64::max`, keeps NaN.
fn floor_at_zero(v: f64) -> f64 {
    if v < 0.0 { 0.0 } else { v }
}
