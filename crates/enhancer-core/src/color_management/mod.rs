//! Color representations used by the pipeline — gamma transfer and HSV.

pub mod hsv;
pub mod transfer;
