//! Grayscale intensity grids
//!
//! [`PixelGrid`] is the unit of exchange between fetching and rendering: a
//! row-major `f32` grid in the source's native intensity range (0-255 for
//! 8-bit imagery). Grids built from raw sensor data may carry NaN samples;
//! [`PixelGrid::scrub_nan`] maps them to 0.0 before any normalization.

use crate::error::RenderError;
use image::DynamicImage;

/// Row-major 2D grid of floating-point intensities
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl PixelGrid {
    /// Build a grid from raw row-major samples
    ///
    /// # Errors
    /// Returns [`RenderError::DimensionMismatch`] when `data.len()` is not
    /// `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Result<Self, RenderError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(RenderError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a decoded image, converting to single-channel
    /// grayscale when the image is not already
    ///
    /// Intensities are widened to `f32` in the 0-255 range.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();
        let data = luma.into_raw().into_iter().map(f32::from).collect();
        Self {
            width: width as usize,
            height: height as usize,
            data,
        }
    }

    /// Grid width in samples
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid holds no samples
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sample at `(x, y)`
    ///
    /// # Panics
    /// Panics when the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y * self.width + x]
    }

    /// Raw row-major samples
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Replace NaN samples with 0.0, returning how many were replaced
    pub fn scrub_nan(&mut self) -> usize {
        let mut scrubbed = 0;
        for sample in &mut self.data {
            if sample.is_nan() {
                *sample = 0.0;
                scrubbed += 1;
            }
        }
        if scrubbed > 0 {
            tracing::debug!(scrubbed, "replaced NaN samples");
        }
        scrubbed
    }

    /// Crop to the centered `side x side` square, `side = min(height, width)`
    ///
    /// Edge samples are removed symmetrically (within integer rounding) so
    /// the crop's center coincides with the grid's center. Square grids come
    /// back unchanged.
    #[must_use]
    pub fn center_crop(&self) -> Self {
        let side = self.height.min(self.width);
        let y0 = (self.height - side) / 2;
        let x0 = (self.width - side) / 2;

        if side == self.width && side == self.height {
            return self.clone();
        }

        let mut data = Vec::with_capacity(side * side);
        for y in y0..y0 + side {
            let row_start = y * self.width + x0;
            data.extend_from_slice(&self.data[row_start..row_start + side]);
        }
        Self {
            width: side,
            height: side,
            data,
        }
    }

    /// Minimum and maximum sample, `None` for empty grids
    #[must_use]
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &sample in &self.data {
            min = min.min(sample);
            max = max.max(sample);
        }
        Some((min, max))
    }
}
