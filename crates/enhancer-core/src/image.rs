//! Image representation for the enhancement pipeline.

use rayon::prelude::*;

use crate::error::EnhanceError;

/// Dense RGB image with `f64` samples, row-major.
///
/// Logical shape is `(height, width, 3)`. Values are meaningfully processed
/// in `[0, 1]` but nothing here enforces that range.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[R, G, B]` triplets.
    pub pixels: Vec<[f64; 3]>,
}

impl RgbImage {
    /// Wrap a pixel vector, checking it covers exactly `width × height` pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<[f64; 3]>) -> Result<Self, EnhanceError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(EnhanceError::PixelCount {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image where every pixel has the same value.
    pub fn filled(width: u32, height: u32, rgb: [f64; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    /// Build an image from a flat, channel-interleaved sample buffer.
    ///
    /// `channels` must be 3 and `samples.len()` must equal
    /// `width × height × channels`.
    pub fn from_interleaved(
        width: u32,
        height: u32,
        channels: usize,
        samples: &[f64],
    ) -> Result<Self, EnhanceError> {
        if channels != 3 {
            return Err(EnhanceError::ChannelCount(channels));
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected * 3 {
            return Err(EnhanceError::PixelCount {
                width,
                height,
                expected,
                actual: samples.len() / 3,
            });
        }
        let pixels = samples
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Logical array shape `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, 3)
    }

    /// Flat view of all samples in `R, G, B, R, G, B, ...` order.
    pub fn as_samples(&self) -> &[f64] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f64; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Produce a new image of the same shape by applying `f` to every pixel.
    ///
    /// Each output pixel depends only on its own input pixel, so pixels are
    /// processed in parallel.
    pub fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn([f64; 3]) -> [f64; 3] + Sync + Send,
    {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.par_iter().map(|&px| f(px)).collect(),
        }
    }

    /// Convert from an `image` crate float RGB buffer.
    pub fn from_rgb32f(buffer: &::image::Rgb32FImage) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer
                .pixels()
                .map(|px| px.0.map(f64::from))
                .collect(),
        }
    }

    /// Convert to an `image` crate float RGB buffer. Samples are narrowed to `f32`.
    pub fn to_rgb32f(&self) -> ::image::Rgb32FImage {
        ::image::ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let px = self.pixels[y as usize * self.width as usize + x as usize];
            ::image::Rgb(px.map(|c| c as f32))
        })
    }
}
