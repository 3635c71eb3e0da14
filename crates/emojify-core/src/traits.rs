//! The contracts that bind the pipeline together
//!
//! - [`FontRef`] - Your window into font data and metrics
//! - [`FontProvider`] - Finds the face a style asks for
//! - [`TextMeasurer`] - How wide a string is at a given size
//! - [`Canvas`] - Where shapes, gradients and glyphs land
//! - [`Backend`] - Hands out canvases
//! - [`Exporter`] - Where bitmaps become bytes

use std::sync::Arc;

use crate::{
    error::Result,
    paint::{BlendMode, Fill, Shadow, ShapePath},
    style::{FontStyle, FontWeight},
    types::{BitmapData, GlyphId},
    Color,
};

/// Vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    /// Distance above the baseline (positive)
    pub ascent: i16,
    /// Distance below the baseline (negative)
    pub descent: i16,
    pub line_gap: i16,
}

/// Receives glyph outline commands in pixel space, y up, origin on the baseline
pub trait OutlinePen {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);
    fn close(&mut self);
}

/// Your key to unlocking font secrets
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(42)
///     }
///
///     fn advance_width(&self, glyph_id: GlyphId) -> f32 {
///         500.0
///     }
///
///     fn outline(&self, glyph_id: GlyphId, size: f32, pen: &mut dyn OutlinePen) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Ascent, descent and line gap, when the font carries them
    fn metrics(&self) -> Option<FontMetrics> {
        None
    }

    /// Trace the glyph outline at `size` pixels per em into `pen`
    fn outline(&self, glyph_id: GlyphId, size: f32, pen: &mut dyn OutlinePen) -> Result<()>;

    /// True when italic was requested but only an upright face exists,
    /// so the rasterizer should slant the outlines itself
    fn synthetic_oblique(&self) -> bool {
        false
    }
}

/// Advance width in pixels of `text` set in `font` at `size`
///
/// Per-character advances are summed; characters the face lacks fall back
/// to glyph 0 (`.notdef`).
pub fn advance_of(font: &dyn FontRef, text: &str, size: f32) -> f32 {
    let upem = font.units_per_em().max(1) as f32;
    let units: f32 = text
        .chars()
        .map(|ch| font.advance_width(font.glyph_id(ch).unwrap_or(0)))
        .sum();
    units * size / upem
}

/// Offset from a glyph's vertical center to its baseline, in pixels
///
/// Centers the em box between ascent and descent, like a canvas
/// `textBaseline = "middle"`. Faces without metrics use 80/20 proportions.
pub fn middle_to_baseline(font: &dyn FontRef, size: f32) -> f32 {
    let (ascent, descent, upem) = match font.metrics() {
        Some(m) if m.units_per_em > 0 && m.ascent > m.descent => {
            (m.ascent as f32, m.descent as f32, m.units_per_em as f32)
        },
        _ => (800.0, -200.0, 1000.0),
    };
    (ascent + descent) / 2.0 * size / upem
}

/// Which face a style wants
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRequest {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
}

/// Turns a family/weight/style request into a loaded face
///
/// The "which fonts are ready" state lives behind this trait so the
/// render engine itself stays a function of `(text, style)`.
pub trait FontProvider: Send + Sync {
    fn resolve(&self, request: &FontRequest) -> Result<Arc<dyn FontRef>>;
}

/// A provider that ignores the request and always returns one face
pub struct FixedFont(pub Arc<dyn FontRef>);

impl FontProvider for FixedFont {
    fn resolve(&self, _request: &FontRequest) -> Result<Arc<dyn FontRef>> {
        Ok(self.0.clone())
    }
}

/// Measures text with the canvas' current face
pub trait TextMeasurer {
    /// Advance width of `text` at `size` pixels per em
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

/// A square drawing surface with a save/restore state stack
///
/// State set with [`set_shadow`](Canvas::set_shadow),
/// [`set_blend_mode`](Canvas::set_blend_mode) and [`clip`](Canvas::clip)
/// applies to every later draw until the matching
/// [`restore`](Canvas::restore). Use [`scoped`] to pair them.
pub trait Canvas: TextMeasurer {
    /// Width and height in pixels
    fn size(&self) -> u32;

    /// Push the current state
    fn save(&mut self);

    /// Pop back to the last saved state; no-op on an empty stack
    fn restore(&mut self);

    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Intersect the clip region with `shape`
    fn clip(&mut self, shape: &ShapePath);

    fn fill(&mut self, shape: &ShapePath, fill: &Fill);

    /// Stroke the outline of `shape`, centered on the edge
    fn stroke(&mut self, shape: &ShapePath, color: Color, width: f32);

    /// Draw `text` centered horizontally on `x` and vertically on `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);

    /// Stop drawing and hand over the straight-alpha pixels
    fn finish(self: Box<Self>) -> Result<BitmapData>;
}

/// Run one drawing phase between `save` and `restore`
pub fn scoped<R>(canvas: &mut dyn Canvas, phase: impl FnOnce(&mut dyn Canvas) -> R) -> R {
    canvas.save();
    let out = phase(canvas);
    canvas.restore();
    out
}

/// Hands out canvases bound to a face
pub trait Backend: Send + Sync {
    /// Your backend's signature
    fn name(&self) -> &'static str;

    /// A fresh, fully transparent `size`×`size` canvas drawing with `font`
    fn create_canvas(&self, size: u32, font: Arc<dyn FontRef>) -> Result<Box<dyn Canvas>>;
}

/// Where bitmaps become files
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encode a finished bitmap
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubFont;

    impl FontRef for StubFont {
        fn data(&self) -> &[u8] {
            &[]
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_id(&self, ch: char) -> Option<GlyphId> {
            if ch.is_ascii() {
                Some(ch as u32)
            } else {
                None
            }
        }

        fn advance_width(&self, glyph_id: GlyphId) -> f32 {
            if glyph_id == 0 {
                1000.0
            } else {
                600.0
            }
        }

        fn outline(&self, _: GlyphId, _: f32, _: &mut dyn OutlinePen) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_advance_sums_characters() {
        assert_eq!(advance_of(&StubFont, "AB", 10.0), 12.0);
        assert_eq!(advance_of(&StubFont, "", 10.0), 0.0);
    }

    #[test]
    fn test_missing_glyph_uses_notdef_advance() {
        assert_eq!(advance_of(&StubFont, "草", 48.0), 48.0);
    }

    #[test]
    fn test_middle_to_baseline_defaults() {
        // (800 - 200) / 2 / 1000 * 100
        assert!((middle_to_baseline(&StubFont, 100.0) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_font_ignores_request() {
        let provider = FixedFont(Arc::new(StubFont));
        let face = provider
            .resolve(&FontRequest {
                family: "Whatever".into(),
                weight: FontWeight::BOLD,
                style: FontStyle::Italic,
            })
            .unwrap();
        assert_eq!(face.units_per_em(), 1000);
    }
}
