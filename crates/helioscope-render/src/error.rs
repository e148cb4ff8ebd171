//! Error types for the render pipeline

/// Errors raised while building grids or rendering frames
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Grid has zero width or height
    #[error("empty grid: {width}x{height}")]
    EmptyGrid {
        /// Grid width in pixels
        width: usize,
        /// Grid height in pixels
        height: usize,
    },

    /// Raw buffer length does not match the declared dimensions
    #[error("dimension mismatch: {width}x{height} needs {expected} samples, got {actual}")]
    DimensionMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Samples required by the dimensions
        expected: usize,
        /// Samples actually supplied
        actual: usize,
    },

    /// Character ramp has no glyphs
    #[error("ascii ramp must contain at least one glyph")]
    EmptyRamp,

    /// Target frame has a zero dimension
    #[error("invalid frame size: {width}x{height}")]
    InvalidFrameSize {
        /// Target width in characters
        width: u32,
        /// Target height in characters
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RenderError::DimensionMismatch {
            width: 3,
            height: 2,
            expected: 6,
            actual: 5,
        };
        assert!(err.to_string().contains("needs 6 samples"));

        let err = RenderError::EmptyGrid {
            width: 0,
            height: 4,
        };
        assert!(err.to_string().contains("0x4"));
    }
}
