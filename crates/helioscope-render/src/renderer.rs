//! Intensity grid to ASCII frame conversion
//!
//! Resample to the target character grid, linearly rescale to `[0, 1]`,
//! bucket each cell through the ramp. Direct quantization: no error
//! diffusion, no aspect-ratio correction.

use crate::error::RenderError;
use crate::grid::PixelGrid;
use crate::ramp::AsciiRamp;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use serde::{Deserialize, Serialize};

/// Substituted for the frame when conversion fails
pub const RENDER_PLACEHOLDER: &str = "Error processing image";

/// Frame dimensions and quantization ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame width in characters
    pub width: u32,
    /// Frame height in characters
    pub height: u32,
    /// Dark-to-light glyph ramp
    pub ramp: AsciiRamp,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With frame dimensions
    #[inline]
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// With quantization ramp
    #[inline]
    #[must_use]
    pub fn with_ramp(mut self, ramp: AsciiRamp) -> Self {
        self.ramp = ramp;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            ramp: AsciiRamp::default(),
        }
    }
}

/// A rendered ASCII frame: exactly `height` lines of `width` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    /// Frame lines, top to bottom
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Characters per line
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |line| line.chars().count())
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Converts intensity grids into fixed-size ASCII frames
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    config: RenderConfig,
}

impl AsciiRenderer {
    /// Create a renderer
    #[inline]
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renderer configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a grid into a frame
    ///
    /// # Errors
    /// Returns [`RenderError`] for empty grids or a zero-sized target frame.
    pub fn render(&self, grid: &PixelGrid) -> Result<Frame, RenderError> {
        if grid.is_empty() {
            return Err(RenderError::EmptyGrid {
                width: grid.width(),
                height: grid.height(),
            });
        }
        if self.config.width == 0 || self.config.height == 0 {
            return Err(RenderError::InvalidFrameSize {
                width: self.config.width,
                height: self.config.height,
            });
        }

        // The resampler clamps float samples to [0, 1], so rescale before
        // resizing. Resampling is affine, and the frame is normalized again
        // over the resized grid, so this does not change the output.
        let Some((min, max)) = grid.min_max() else {
            return Err(RenderError::EmptyGrid {
                width: grid.width(),
                height: grid.height(),
            });
        };
        let span = max - min;
        let prescaled: Vec<f32> = if span > 0.0 {
            grid.as_slice().iter().map(|v| (v - min) / span).collect()
        } else {
            vec![0.0; grid.as_slice().len()]
        };

        let buffer: ImageBuffer<Luma<f32>, Vec<f32>> = ImageBuffer::from_raw(
            grid.width() as u32,
            grid.height() as u32,
            prescaled,
        )
        .ok_or(RenderError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        })?;

        let resized = imageops::resize(
            &buffer,
            self.config.width,
            self.config.height,
            FilterType::Triangle,
        );

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for pixel in resized.pixels() {
            min = min.min(pixel.0[0]);
            max = max.max(pixel.0[0]);
        }
        let span = max - min;

        let mut lines = Vec::with_capacity(self.config.height as usize);
        for y in 0..self.config.height {
            let mut line = String::with_capacity(self.config.width as usize);
            for x in 0..self.config.width {
                let value = resized.get_pixel(x, y).0[0];
                let normalized = if span > 0.0 { (value - min) / span } else { 0.0 };
                line.push(self.config.ramp.glyph_for(normalized));
            }
            lines.push(line);
        }

        Ok(Frame { lines })
    }

    /// Render a grid, substituting [`RENDER_PLACEHOLDER`] on any failure
    #[must_use]
    pub fn render_or_placeholder(&self, grid: &PixelGrid) -> String {
        match self.render(grid) {
            Ok(frame) => frame.to_string(),
            Err(error) => {
                tracing::warn!(%error, "ascii conversion failed");
                RENDER_PLACEHOLDER.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> AsciiRenderer {
        AsciiRenderer::new(RenderConfig::default())
    }

    fn grid_of(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> PixelGrid {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        PixelGrid::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn frame_is_always_80_by_24() {
        for (w, h) in [(1, 1), (37, 100), (512, 512), (1024, 4)] {
            let grid = grid_of(w, h, |x, y| (x + y) as f32);
            let frame = renderer().render(&grid).unwrap();
            assert_eq!(frame.height(), 24);
            for line in frame.lines() {
                assert_eq!(line.chars().count(), 80);
            }
        }
    }

    #[test]
    fn constant_grid_renders_darkest_glyph() {
        let grid = grid_of(64, 64, |_, _| 127.0);
        let frame = renderer().render(&grid).unwrap();
        for line in frame.lines() {
            assert!(line.chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn all_nan_grid_renders_darkest_glyph() {
        let mut grid = grid_of(32, 32, |_, _| f32::NAN);
        grid.scrub_nan();
        let frame = renderer().render(&grid).unwrap();
        for line in frame.lines() {
            assert!(line.chars().all(|c| c == ' '));
        }
    }

    const DEFAULT_GLYPHS: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    #[test]
    fn gradient_glyphs_monotone_along_rows() {
        let grid = grid_of(256, 64, |x, _| x as f32);
        let frame = renderer().render(&grid).unwrap();
        for line in frame.lines() {
            let mut last = 0;
            for glyph in line.chars() {
                let index = DEFAULT_GLYPHS
                    .iter()
                    .position(|&g| g == glyph)
                    .expect("glyph from ramp");
                assert!(index >= last, "indices regressed in {line:?}");
                last = index;
            }
        }
    }

    #[test]
    fn gradient_spans_full_ramp() {
        let grid = grid_of(256, 64, |x, _| x as f32);
        let frame = renderer().render(&grid).unwrap();
        let first = frame.lines()[0].chars().next().unwrap();
        let last = frame.lines()[0].chars().last().unwrap();
        assert_eq!(first, ' ');
        assert_eq!(last, '@');
    }

    #[test]
    fn empty_grid_is_an_error() {
        let grid = PixelGrid::from_raw(0, 0, vec![]).unwrap();
        assert!(matches!(
            renderer().render(&grid),
            Err(RenderError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn placeholder_on_failure() {
        let grid = PixelGrid::from_raw(0, 0, vec![]).unwrap();
        assert_eq!(renderer().render_or_placeholder(&grid), RENDER_PLACEHOLDER);
    }

    #[test]
    fn custom_frame_size() {
        let config = RenderConfig::default().with_size(40, 12);
        let frame = AsciiRenderer::new(config)
            .render(&grid_of(100, 100, |x, y| (x * y) as f32))
            .unwrap();
        assert_eq!(frame.height(), 12);
        assert_eq!(frame.width(), 40);
    }
}
