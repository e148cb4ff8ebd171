//! Character ramps for intensity quantization

use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// Default 10-glyph ramp, darkest to lightest
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// Ordered glyph sequence from darkest to lightest
///
/// Quantization is plain bucketed indexing: a normalized intensity in
/// `[0, 1]` maps to `floor(intensity * (len - 1))`, clamped to the ramp.
/// No error diffusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AsciiRamp {
    glyphs: Vec<char>,
}

impl AsciiRamp {
    /// Build a ramp from a dark-to-light glyph string
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyRamp`] for an empty string.
    pub fn new(glyphs: impl AsRef<str>) -> Result<Self, RenderError> {
        let glyphs: Vec<char> = glyphs.as_ref().chars().collect();
        if glyphs.is_empty() {
            return Err(RenderError::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the ramp has no glyphs (never true for a constructed ramp)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether `glyph` belongs to this ramp
    #[inline]
    #[must_use]
    pub fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains(&glyph)
    }

    /// Glyph for a normalized intensity (0.0 = darkest, 1.0 = lightest)
    ///
    /// Out-of-range intensities clamp to the ramp ends.
    #[must_use]
    pub fn glyph_for(&self, normalized: f32) -> char {
        let last = self.glyphs.len() - 1;
        let index = (normalized * last as f32) as usize;
        self.glyphs[index.min(last)]
    }

    /// Bucket index for a normalized intensity
    #[must_use]
    pub fn index_for(&self, normalized: f32) -> usize {
        let last = self.glyphs.len() - 1;
        ((normalized * last as f32) as usize).min(last)
    }
}

impl Default for AsciiRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl TryFrom<String> for AsciiRamp {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AsciiRamp> for String {
    fn from(ramp: AsciiRamp) -> Self {
        ramp.glyphs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ramp_has_ten_glyphs() {
        let ramp = AsciiRamp::default();
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.glyph_for(0.0), ' ');
        assert_eq!(ramp.glyph_for(1.0), '@');
    }

    #[test]
    fn bucketed_indexing_worked_example() {
        // floor(0.55 * 9) = 4 -> '='
        let ramp = AsciiRamp::default();
        assert_eq!(ramp.index_for(0.55), 4);
        assert_eq!(ramp.glyph_for(0.55), '=');
    }

    #[test]
    fn out_of_range_clamps() {
        let ramp = AsciiRamp::default();
        assert_eq!(ramp.glyph_for(1.5), '@');
        assert_eq!(ramp.glyph_for(-0.5), ' ');
    }

    #[test]
    fn indices_monotone_in_intensity() {
        let ramp = AsciiRamp::default();
        let mut last = 0;
        for step in 0..=100 {
            let index = ramp.index_for(step as f32 / 100.0);
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn empty_ramp_rejected() {
        assert!(matches!(AsciiRamp::new(""), Err(RenderError::EmptyRamp)));
    }

    #[test]
    fn serde_round_trip() {
        let ramp = AsciiRamp::default();
        let json = serde_json::to_string(&ramp).unwrap();
        assert_eq!(json, "\" .:-=+*#%@\"");
        let back: AsciiRamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ramp);
    }
}
