//! Per-channel lift/gamma/gain tonal correction.
//!
//! Parameters are raw slider values with `0.5` as the neutral setting.
//! For each channel:
//! ```text
//!   x = clip((in − 1) × slope + 1, 0, 1)        lift, pivots around white
//!   x = x × (gain + 0.5)                        gain, unclamped
//!   out = clip(x ^ (1 / (gamma + 0.5)), 0, 1)   gamma
//! ```
//!
//! The lift slope depends on the [`LiftModel`]:
//! ```text
//!   Basic:      slope = base − (lift + 0.5)           base = 2
//!   Attenuated: slope = 1 − attenuation × (lift − 0.5)  attenuation = 0.25
//! ```
//!
//! `gamma + 0.5 <= 0` gives an infinite or negative exponent. That is passed
//! through as IEEE arithmetic produces it.

use glam::DVec3;

use crate::image::RgbImage;
use crate::transform::params::{NEUTRAL, PipelineConstants};

/// Which lift formula to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftModel {
    /// Full-strength lift, `slope = base − (lift + 0.5)`.
    Basic,
    /// Attenuated lift, `slope = 1 − attenuation × (lift − 0.5)`.
    Attenuated,
}

impl LiftModel {
    fn slope(self, lift: DVec3, constants: &PipelineConstants) -> DVec3 {
        match self {
            Self::Basic => DVec3::splat(constants.basic_lift_base) - (lift + NEUTRAL),
            Self::Attenuated => DVec3::ONE - (lift - NEUTRAL) * constants.lift_attenuation,
        }
    }
}

/// Per-channel `[R, G, B]` lift, gamma and gain slider values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftGammaGain {
    pub lift: DVec3,
    pub gamma: DVec3,
    pub gain: DVec3,
}

impl Default for LiftGammaGain {
    fn default() -> Self {
        Self {
            lift: DVec3::splat(NEUTRAL),
            gamma: DVec3::splat(NEUTRAL),
            gain: DVec3::splat(NEUTRAL),
        }
    }
}

impl LiftGammaGain {
    /// Build from three `[R, G, B]` parameter slices.
    ///
    /// # Panics
    /// If any slice has fewer than 3 entries.
    pub fn from_slices(lift: &[f64], gamma: &[f64], gain: &[f64]) -> Self {
        Self {
            lift: DVec3::from_slice(lift),
            gamma: DVec3::from_slice(gamma),
            gain: DVec3::from_slice(gain),
        }
    }
}

/// Apply lift/gamma/gain to a linear-light RGB pixel.
pub fn apply_lift_gamma_gain(
    rgb: [f64; 3],
    lgg: &LiftGammaGain,
    model: LiftModel,
    constants: &PipelineConstants,
) -> [f64; 3] {
    let x = DVec3::from_array(rgb);

    let lifted = clip_unit((x - DVec3::ONE) * model.slope(lgg.lift, constants) + DVec3::ONE);
    let gained = lifted * (lgg.gain + NEUTRAL);

    let exponent = DVec3::ONE / (lgg.gamma + NEUTRAL);
    let out = DVec3::new(
        gained.x.powf(exponent.x),
        gained.y.powf(exponent.y),
        gained.z.powf(exponent.z),
    );
    clip_unit(out).to_array()
}

/// Apply lift/gamma/gain to every pixel of a linear-light image.
pub fn lift_gamma_gain(
    image: &RgbImage,
    lgg: &LiftGammaGain,
    model: LiftModel,
    constants: &PipelineConstants,
) -> RgbImage {
    image.map_pixels(|px| apply_lift_gamma_gain(px, lgg, model, constants))
}

// `DVec3::clamp` goes through `f64::max`, which would turn NaN into a bound.
fn clip_unit(v: DVec3) -> DVec3 {
    DVec3::from_array(v.to_array().map(|c| c.clamp(0.0, 1.0)))
}
