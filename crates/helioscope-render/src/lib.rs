//! Helioscope Render - intensity grids to terminal ASCII art
//!
//! The quantization pipeline that turns a grayscale intensity grid into a
//! fixed-size character frame:
//! - [`PixelGrid`]: row-major `f32` intensity grid with NaN scrubbing and
//!   centered square cropping
//! - [`AsciiRamp`]: ordered dark-to-light glyph sequence used for bucketing
//! - [`AsciiRenderer`]: resample, rescale to `[0, 1]`, substitute glyphs
//!
//! # Example
//!
//! ```rust
//! use helioscope_render::{AsciiRenderer, PixelGrid, RenderConfig};
//!
//! let grid = PixelGrid::from_raw(4, 4, vec![0.0; 16]).unwrap();
//! let renderer = AsciiRenderer::new(RenderConfig::default());
//! let frame = renderer.render(&grid).unwrap();
//! assert_eq!(frame.height(), 24);
//! ```

// Core modules
pub mod error;
pub mod grid;
pub mod ramp;
pub mod renderer;

// Re-exports for convenience
pub use error::RenderError;
pub use grid::PixelGrid;
pub use ramp::AsciiRamp;
pub use renderer::{AsciiRenderer, Frame, RenderConfig, RENDER_PLACEHOLDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
