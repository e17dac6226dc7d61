//! Stage definitions and per-pixel evaluation of a stage list.

use std::ops::Range;

use crate::color_management::transfer::GammaCodec;
use crate::grading::sliders::{apply_brightness, apply_contrast, apply_saturation};
use crate::grading::wheels::{LiftGammaGain, LiftModel, apply_lift_gamma_gain};
use crate::transform::params::{NEUTRAL, PipelineConstants};

/// One step of a pipeline. Parameter positions refer to the flat parameter vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Decode display-encoded values to linear light.
    ToLinear,
    /// Per-channel lift/gamma/gain read from three `[R, G, B]` ranges.
    LiftGammaGain {
        lift: Range<usize>,
        gamma: Range<usize>,
        gain: Range<usize>,
        model: LiftModel,
    },
    /// Brightness power curve driven by `params[slot] − 0.5`.
    Brightness { slot: usize },
    /// Pivot contrast driven by `params[slot] − 0.5`.
    Contrast { slot: usize },
    /// HSV saturation scale driven by `params[slot] − 0.5`.
    Saturation { slot: usize },
    /// Clip every channel to `[0, 1]`.
    Clip,
    /// Encode linear light for display.
    FromLinear,
}

impl Stage {
    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ToLinear => "to_linear",
            Self::LiftGammaGain { .. } => "lift_gamma_gain",
            Self::Brightness { .. } => "brightness",
            Self::Contrast { .. } => "contrast",
            Self::Saturation { .. } => "saturation",
            Self::Clip => "clip",
            Self::FromLinear => "from_linear",
        }
    }

    /// Apply this stage to a single pixel.
    ///
    /// `params` must already have been checked against the pipeline's layout;
    /// an out-of-range position panics.
    pub fn apply(&self, rgb: [f64; 3], params: &[f64], constants: &PipelineConstants) -> [f64; 3] {
        let codec = GammaCodec::new(constants.gamma);
        match self {
            Self::ToLinear => codec.pixel_to_linear(rgb),
            Self::LiftGammaGain {
                lift,
                gamma,
                gain,
                model,
            } => {
                let lgg = LiftGammaGain::from_slices(
                    &params[lift.clone()],
                    &params[gamma.clone()],
                    &params[gain.clone()],
                );
                apply_lift_gamma_gain(rgb, &lgg, *model, constants)
            }
            Self::Brightness { slot } => {
                apply_brightness(rgb, params[*slot] - NEUTRAL, constants.brightness_scale)
            }
            Self::Contrast { slot } => apply_contrast(rgb, params[*slot] - NEUTRAL, codec),
            Self::Saturation { slot } => apply_saturation(rgb, params[*slot] - NEUTRAL),
            Self::Clip => rgb.map(|c| c.clamp(0.0, 1.0)),
            Self::FromLinear => codec.pixel_to_encoded(rgb),
        }
    }
}

/// Run a pixel through every stage in order.
pub fn evaluate_stages(
    rgb: [f64; 3],
    stages: &[Stage],
    params: &[f64],
    constants: &PipelineConstants,
) -> [f64; 3] {
    stages
        .iter()
        .fold(rgb, |px, stage| stage.apply(px, params, constants))
}
