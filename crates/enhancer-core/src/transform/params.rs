//! Parameter layout, labels, and tunable constants for the enhancement pipeline.
//!
//! A parameter vector is a flat `&[f64]` whose length is fixed by the
//! [`Variant`]. Every entry is nominally in `[0, 1]` with `0.5` meaning
//! "no effect"; nothing bounds the values, out-of-range entries extrapolate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EnhanceError;

/// Parameter value that leaves its stage unchanged.
pub const NEUTRAL: f64 = 0.5;

/// Display gamma exponent used to move between encoded and linear-light values.
pub const DISPLAY_GAMMA: f64 = 2.2;

/// Scale applied to the centered brightness parameter.
pub const BRIGHTNESS_SCALE: f64 = 1.5;

/// Lift slope attenuation used by the extended pipeline.
pub const LIFT_ATTENUATION: f64 = 0.25;

/// Slope origin of the basic lift formula, `base − (lift + 0.5)`.
pub const BASIC_LIFT_BASE: f64 = 2.0;

const BASIC_LABELS: [&str; 9] = [
    "Lift (R)",
    "Lift (G)",
    "Lift (B)",
    "Gamma (R)",
    "Gamma (G)",
    "Gamma (B)",
    "Gain (R)",
    "Gain (G)",
    "Gain (B)",
];

const EXTENDED_LABELS: [&str; 12] = [
    "Brightness",
    "Contrast",
    "Saturation",
    "Lift (R)",
    "Lift (G)",
    "Lift (B)",
    "Gamma (R)",
    "Gamma (G)",
    "Gamma (B)",
    "Gain (R)",
    "Gain (G)",
    "Gain (B)",
];

/// Pipeline configuration, selecting both stage order and parameter layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Lift/gamma/gain only. 9 parameters.
    Basic,
    /// Lift/gamma/gain followed by brightness, contrast and saturation. 12 parameters.
    Extended,
}

impl Variant {
    /// Both variants, basic first.
    pub fn all() -> &'static [Self] {
        &[Self::Basic, Self::Extended]
    }

    /// Human-readable parameter names, one per parameter position.
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &BASIC_LABELS,
            Self::Extended => &EXTENDED_LABELS,
        }
    }

    /// Exact parameter-vector length this variant accepts.
    pub const fn param_count(self) -> usize {
        self.labels().len()
    }

    /// The variant whose parameter vector has `count` entries.
    pub fn from_param_count(count: usize) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.param_count() == count)
    }

    /// The all-neutral parameter vector, which leaves images unchanged.
    pub fn neutral_params(self) -> Vec<f64> {
        vec![NEUTRAL; self.param_count()]
    }

    /// Reject a parameter vector whose length does not match this variant.
    pub fn check_params(self, params: &[f64]) -> Result<(), EnhanceError> {
        let expected = self.param_count();
        if params.len() != expected {
            return Err(EnhanceError::ParamCount {
                variant: self,
                expected,
                actual: params.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Tunable constants shared by the pipeline stages.
///
/// Missing fields take their defaults when deserializing, so a JSON document
/// only needs to name the constants it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConstants {
    /// Gamma codec exponent. Default: [`DISPLAY_GAMMA`].
    pub gamma: f64,
    /// Brightness exponent scale. Default: [`BRIGHTNESS_SCALE`].
    pub brightness_scale: f64,
    /// Extended-variant lift attenuation. Default: [`LIFT_ATTENUATION`].
    pub lift_attenuation: f64,
    /// Basic-variant lift slope origin. Default: [`BASIC_LIFT_BASE`].
    pub basic_lift_base: f64,
}

impl Default for PipelineConstants {
    fn default() -> Self {
        Self {
            gamma: DISPLAY_GAMMA,
            brightness_scale: BRIGHTNESS_SCALE,
            lift_attenuation: LIFT_ATTENUATION,
            basic_lift_base: BASIC_LIFT_BASE,
        }
    }
}

impl PipelineConstants {
    /// Parse and validate constants from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, EnhanceError> {
        let constants: Self = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Serialize to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, EnhanceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every constant must be finite, and the gamma exponent strictly positive.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        let fields = [
            ("gamma", self.gamma),
            ("brightness_scale", self.brightness_scale),
            ("lift_attenuation", self.lift_attenuation),
            ("basic_lift_base", self.basic_lift_base),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EnhanceError::InvalidConstant { name, value });
        }
        if self.gamma <= 0.0 {
            return Err(EnhanceError::InvalidConstant {
                name: "gamma",
                value: self.gamma,
            });
        }
        Ok(())
    }
}
