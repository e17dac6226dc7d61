//! Enhancer Core — parametric color enhancement for interactive tools.
//!
//! A fixed-length slider vector drives lift/gamma/gain, brightness, contrast
//! and saturation adjustments over a display-encoded RGB image. Every call
//! is a pure function of the image and the parameters.

pub mod color_management;
pub mod error;
pub mod grading;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use error::EnhanceError;
pub use crate::image::RgbImage;
pub use transform::params::{PipelineConstants, Variant};
pub use transform::pipeline::{Pipeline, enhance};
