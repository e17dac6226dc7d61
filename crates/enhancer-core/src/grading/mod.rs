//! Grading stages — lift/gamma/gain wheels and brightness, contrast, saturation sliders.

pub mod sliders;
pub mod wheels;
