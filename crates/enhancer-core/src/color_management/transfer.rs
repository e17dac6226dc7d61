//! Pure power-law transfer between display-encoded and linear-light values.
//!
//! ```text
//! to_linear:  L = V ^ Γ
//! to_encoded: V = L ^ (1 / Γ)
//! ```
//!
//! No clipping is applied. Negative inputs raised to a fractional power give
//! NaN, which is passed through unchanged.

use crate::image::RgbImage;
use crate::transform::params::DISPLAY_GAMMA;

/// Power-law gamma codec with a fixed exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaCodec {
    gamma: f64,
}

impl Default for GammaCodec {
    fn default() -> Self {
        Self::new(DISPLAY_GAMMA)
    }
}

impl GammaCodec {
    /// Codec with exponent `gamma` (Γ).
    pub const fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// The exponent Γ.
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Convert from display-encoded to linear light.
    pub fn to_linear(&self, encoded: f64) -> f64 {
        encoded.powf(self.gamma)
    }

    /// Convert from linear light to display-encoded.
    pub fn to_encoded(&self, linear: f64) -> f64 {
        linear.powf(1.0 / self.gamma)
    }

    pub fn pixel_to_linear(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.to_linear(c))
    }

    pub fn pixel_to_encoded(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.to_encoded(c))
    }
}

/// Decode a whole display-encoded image to linear light.
pub fn to_linear(image: &RgbImage, codec: GammaCodec) -> RgbImage {
    image.map_pixels(|px| codec.pixel_to_linear(px))
}

/// Encode a whole linear-light image for display.
pub fn from_linear(image: &RgbImage, codec: GammaCodec) -> RgbImage {
    image.map_pixels(|px| codec.pixel_to_encoded(px))
}
