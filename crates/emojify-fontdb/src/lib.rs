//! Fonts for emojify: loading faces and finding the one a style asks for
//!
//! [`Font`] wraps raw font bytes and answers the questions the renderer
//! asks: which glyph draws a character, how wide it is, and what its
//! outline looks like. [`FontLibrary`] indexes system and user fonts with
//! `fontdb` and resolves family/weight/style requests to loaded faces.
//!
//! ## Memory Management
//!
//! Fonts keep their raw data and create a parser view on demand. Faces are
//! loaded once per library and shared as `Arc<Font>`; instances of a
//! variable face at other weights share the same bytes.

mod library;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use read_fonts::{types::Tag, FontRef as ReadFontRef, TableProvider};
use skrifa::{
    instance::{Location, Size},
    outline::DrawSettings,
    MetadataProvider,
};

use emojify_core::{
    error::{FontLoadError, RenderError, Result},
    traits::{FontMetrics, FontRef, OutlinePen},
    types::GlyphId,
};

pub use library::FontLibrary;

const WGHT: Tag = Tag::new(b"wght");

/// A loaded face, ready to be measured and drawn
///
/// For TTC collections `face_index` picks the face. Variable faces are
/// drawn at `location`, which is the default instance until
/// [`Font::at_weight`] moves it.
#[derive(Clone)]
pub struct Font {
    data: Arc<[u8]>,
    face_index: u32,
    units_per_em: u16,
    family: String,
    italic: bool,
    synthetic_oblique: bool,
    location: Location,
    weight: Option<f32>,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FontLoadError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into a face
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        let family = font_ref
            .localized_strings(skrifa::string::StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.to_string())
            .unwrap_or_default();

        Ok(Font {
            data: data.into(),
            face_index,
            units_per_em,
            family,
            italic: false,
            synthetic_oblique: false,
            location: Location::default(),
            weight: None,
        })
    }

    /// Record what the face database knows about this face
    pub(crate) fn with_face_info(mut self, family: &str, italic: bool) -> Self {
        if !family.is_empty() {
            self.family = family.to_string();
        }
        self.italic = italic;
        self
    }

    /// Ask the rasterizer to slant this upright face
    pub fn with_synthetic_oblique(mut self, oblique: bool) -> Self {
        self.synthetic_oblique = oblique;
        self
    }

    /// Whether the face has a `wght` variation axis
    pub fn has_weight_axis(&self) -> bool {
        self.font_ref()
            .is_some_and(|font| font.axes().iter().any(|axis| axis.tag() == WGHT))
    }

    /// This face instanced at `weight`, clamped to the `wght` axis range
    ///
    /// Static faces come back unchanged.
    pub fn at_weight(&self, weight: u16) -> Self {
        let mut font = self.clone();
        let Some(font_ref) = self.font_ref() else {
            return font;
        };
        let axes = font_ref.axes();
        if let Some(axis) = axes.iter().find(|axis| axis.tag() == WGHT) {
            let value = (weight as f32).clamp(axis.min_value(), axis.max_value());
            font.location = axes.location([(WGHT, value)]);
            font.weight = Some(value);
        }
        font
    }

    /// The `wght` coordinate this face is drawn at, for variable faces
    pub fn variation_weight(&self) -> Option<f32> {
        self.weight
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Family name from the `name` table or the face database
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Whether the face itself is italic or oblique
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Counts how many glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        // glyph_metrics applies HVAR/gvar deltas at our location
        self.font_ref()
            .and_then(|font| {
                font.glyph_metrics(Size::unscaled(), &self.location)
                    .advance_width(skrifa::GlyphId::new(glyph_id))
            })
            // Half an em when metrics are missing
            .unwrap_or(self.units_per_em as f32 / 2.0)
    }

    fn metrics(&self) -> Option<FontMetrics> {
        let font = self.font_ref()?;
        let (ascent, descent, line_gap) = font
            .os2()
            .ok()
            .map(|os2| {
                (
                    os2.s_typo_ascender(),
                    os2.s_typo_descender(),
                    os2.s_typo_line_gap(),
                )
            })
            .or_else(|| {
                font.hhea().ok().map(|hhea| {
                    (
                        hhea.ascender().to_i16(),
                        hhea.descender().to_i16(),
                        hhea.line_gap().to_i16(),
                    )
                })
            })?;
        Some(FontMetrics {
            units_per_em: self.units_per_em,
            ascent,
            descent,
            line_gap,
        })
    }

    fn outline(&self, glyph_id: GlyphId, size: f32, pen: &mut dyn OutlinePen) -> Result<()> {
        let font = skrifa::FontRef::from_index(&self.data, self.face_index)
            .map_err(|_| FontLoadError::InvalidData)?;
        let glyph = font
            .outline_glyphs()
            .get(skrifa::GlyphId::new(glyph_id))
            .ok_or(RenderError::OutlineExtractionFailed(glyph_id))?;

        // skrifa scales to pixels for us; the pen sees y-up pixel space
        let settings = DrawSettings::unhinted(Size::new(size), &self.location);
        glyph
            .draw(settings, &mut PenAdapter(pen))
            .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;
        Ok(())
    }

    fn synthetic_oblique(&self) -> bool {
        self.synthetic_oblique
    }
}

/// Bridge between skrifa's outline commands and ours
struct PenAdapter<'a>(&'a mut dyn OutlinePen);

impl skrifa::outline::OutlinePen for PenAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.0.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
