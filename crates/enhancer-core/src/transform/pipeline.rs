//! Pipeline orchestration — stage order and parameter layout per variant.
//!
//! ```text
//! Basic:    to_linear → lift/gamma/gain[0..9] → from_linear
//! Extended: to_linear → lift/gamma/gain[3..12] → brightness[0] → contrast[1]
//!           → saturation[2] → clip(0, 1) → from_linear
//! ```
//!
//! A pipeline is immutable once built and holds no per-call state, so one
//! instance can serve any number of `enhance` calls, including concurrent ones.

use crate::error::EnhanceError;
use crate::grading::wheels::LiftModel;
use crate::image::RgbImage;
use crate::transform::evaluate::{Stage, evaluate_stages};
use crate::transform::params::{PipelineConstants, Variant};

/// An ordered list of stages bound to a parameter layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    variant: Variant,
    constants: PipelineConstants,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Pipeline for `variant` with the default constants.
    pub fn new(variant: Variant) -> Self {
        Self::with_constants(variant, PipelineConstants::default())
    }

    /// Pipeline for `variant` with custom constants.
    pub fn with_constants(variant: Variant, constants: PipelineConstants) -> Self {
        let stages = stages_for(variant);
        tracing::trace!(
            "built {variant} pipeline: {}",
            stages.iter().map(Stage::name).collect::<Vec<_>>().join(" → ")
        );
        Self {
            variant,
            constants,
            stages,
        }
    }

    /// The 9-parameter lift/gamma/gain pipeline.
    pub fn basic() -> Self {
        Self::new(Variant::Basic)
    }

    /// The 12-parameter pipeline with brightness, contrast and saturation.
    pub fn extended() -> Self {
        Self::new(Variant::Extended)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn constants(&self) -> &PipelineConstants {
        &self.constants
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Parameter labels, positionally matching the parameter vector.
    pub fn labels(&self) -> &'static [&'static str] {
        self.variant.labels()
    }

    pub fn param_count(&self) -> usize {
        self.variant.param_count()
    }

    /// Enhance a display-encoded image.
    ///
    /// The parameter vector length is checked before any pixel is touched.
    /// The input is never modified; a new image of the same shape is returned.
    /// Numeric edge cases (negative bases, degenerate exponents) are not
    /// errors and show up as NaN or infinity in the output.
    pub fn enhance(&self, image: &RgbImage, params: &[f64]) -> Result<RgbImage, EnhanceError> {
        if let Err(e) = self.variant.check_params(params) {
            tracing::warn!("rejected enhance call: {e}");
            return Err(e);
        }

        tracing::debug!(
            "enhancing {}x{} image with {} pipeline",
            image.width,
            image.height,
            self.variant
        );

        Ok(image.map_pixels(|px| evaluate_stages(px, &self.stages, params, &self.constants)))
    }

    /// Enhance a single display-encoded pixel.
    pub fn enhance_pixel(&self, rgb: [f64; 3], params: &[f64]) -> Result<[f64; 3], EnhanceError> {
        self.variant.check_params(params)?;
        Ok(evaluate_stages(rgb, &self.stages, params, &self.constants))
    }
}

/// Enhance `image` with the default-constant pipeline for `variant`.
pub fn enhance(variant: Variant, image: &RgbImage, params: &[f64]) -> Result<RgbImage, EnhanceError> {
    Pipeline::new(variant).enhance(image, params)
}

fn stages_for(variant: Variant) -> Vec<Stage> {
    match variant {
        Variant::Basic => vec![
            Stage::ToLinear,
            Stage::LiftGammaGain {
                lift: 0..3,
                gamma: 3..6,
                gain: 6..9,
                model: LiftModel::Basic,
            },
            Stage::FromLinear,
        ],
        Variant::Extended => vec![
            Stage::ToLinear,
            Stage::LiftGammaGain {
                lift: 3..6,
                gamma: 6..9,
                gain: 9..12,
                model: LiftModel::Attenuated,
            },
            Stage::Brightness { slot: 0 },
            Stage::Contrast { slot: 1 },
            Stage::Saturation { slot: 2 },
            Stage::Clip,
            Stage::FromLinear,
        ],
    }
}
