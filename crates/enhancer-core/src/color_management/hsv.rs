//! RGB ↔ hue-saturation-value conversion.
//!
//! Conversions are unclamped: values outside `[0, 1]` are converted by the
//! same formulas instead of being forced into gamut first.
//!
//! ```text
//! V = max(R, G, B)
//! S = (V − min(R, G, B)) / V      (0 when V = 0)
//! H = hexcone angle of the dominant channel
//! ```

use palette::convert::FromColorUnclamped;
use palette::encoding::Srgb;
use palette::Hsv;
use palette::rgb::Rgb;

/// A single HSV sample. Hue is in degrees.
pub type HsvPixel = Hsv<Srgb, f64>;

/// Convert an RGB triplet to HSV.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> HsvPixel {
    HsvPixel::from_color_unclamped(Rgb::<Srgb, f64>::new(rgb[0], rgb[1], rgb[2]))
}

/// Convert an HSV sample back to an RGB triplet.
pub fn hsv_to_rgb(hsv: HsvPixel) -> [f64; 3] {
    let rgb = Rgb::<Srgb, f64>::from_color_unclamped(hsv);
    [rgb.red, rgb.green, rgb.blue]
}

/// Multiply saturation by `factor` and clip it to `[0, 1]`.
///
/// Hue and value are copied through untouched.
pub fn scale_saturation(hsv: HsvPixel, factor: f64) -> HsvPixel {
    let mut out = hsv;
    out.saturation = (hsv.saturation * factor).clamp(0.0, 1.0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_primary_red() {
        let hsv = rgb_to_hsv([1.0, 0.0, 0.0]);
        assert!(hsv.hue.into_positive_degrees().abs() < EPSILON);
        assert!((hsv.saturation - 1.0).abs() < EPSILON);
        assert!((hsv.value - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_gray_has_zero_saturation() {
        let hsv = rgb_to_hsv([0.4, 0.4, 0.4]);
        assert_eq!(hsv.saturation, 0.0);
        assert!((hsv.value - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let hsv = rgb_to_hsv([0.0, 0.0, 0.0]);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.0);
    }

    #[test]
    fn test_rgb_hsv_roundtrip() {
        for rgb in [[0.8, 0.4, 0.2], [0.1, 0.9, 0.5], [0.3, 0.3, 0.7], [0.0, 0.5, 1.0]] {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            for c in 0..3 {
                assert!(
                    (back[c] - rgb[c]).abs() < EPSILON,
                    "channel {c}: {:.12} vs {:.12}",
                    back[c],
                    rgb[c]
                );
            }
        }
    }

    #[test]
    fn test_value_above_one_is_not_clamped() {
        let hsv = rgb_to_hsv([1.5, 0.75, 0.75]);
        assert!((hsv.value - 1.5).abs() < EPSILON);
        assert!((hsv.saturation - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_scale_saturation_keeps_hue_and_value() {
        let hsv = rgb_to_hsv([0.8, 0.4, 0.2]);
        let scaled = scale_saturation(hsv, 0.5);
        assert_eq!(
            scaled.hue.into_raw_degrees().to_bits(),
            hsv.hue.into_raw_degrees().to_bits()
        );
        assert_eq!(scaled.value.to_bits(), hsv.value.to_bits());
        assert!((scaled.saturation - hsv.saturation * 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_scale_saturation_clips_to_unit_range() {
        let hsv = rgb_to_hsv([0.8, 0.4, 0.2]);
        assert_eq!(scale_saturation(hsv, 10.0).saturation, 1.0);
        assert_eq!(scale_saturation(hsv, -1.0).saturation, 0.0);
    }
}
