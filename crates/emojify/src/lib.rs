//! Emojify - short text in, 128×128 chat emoji out
//!
//! This crate re-exports the workspace pieces and wires the default stack
//! together: system fonts through `fontdb`, the tiny-skia backend and the
//! PNG exporter.
//!
//! # Example
//!
//! ```ignore
//! use emojify::prelude::*;
//!
//! let emojifier = Emojifier::new()?;
//! let style = emojify::preset("neon-glow").map(|p| p.style).unwrap_or_default();
//! let emoji = emojifier.render(&EmojiData::new("草", "kusa"), &style)?;
//! std::fs::write(emoji.download_name(), &emoji.blob)?;
//! ```
//!
//! # Feature Flags
//!
//! - `input` (default): [`Emojifier::render_text_input`] and
//!   [`Emojifier::render_csv`], backed by `emojify-input`
//! - `parallel`: [`Emojifier::render_all_parallel`] via rayon

use std::sync::Arc;

pub use emojify_core::{
    compose, error, fit, layout, preset, presets, traits, types, Color, EmojiData, EmojiStyle,
    EmojifyError, FontStyle, FontWeight, GeneratedEmoji, Layout, Pipeline, Preset, Result, Shape,
    CANVAS_SIZE, MIN_FONT_SIZE,
};
pub use emojify_export as export;
pub use emojify_fontdb as fontdb;
#[cfg(feature = "input")]
pub use emojify_input as input;
pub use emojify_render_skia as render_skia;

use emojify_export::PngExporter;
use emojify_fontdb::FontLibrary;
use emojify_render_skia::SkiaBackend;

/// Common imports for typical usage
pub mod prelude {
    pub use crate::Emojifier;
    pub use emojify_core::{
        error::{EmojifyError, Result},
        traits::{Backend, Canvas, Exporter, FontProvider, FontRef},
        EmojiData, EmojiStyle, GeneratedEmoji, Layout, Pipeline, Shape,
    };
}

/// A ready-to-use pipeline on the default stack
///
/// Each emoji is drawn with the single face its style resolves to. Text is
/// split into grapheme clusters for layout, but characters that face has
/// no glyph for are drawn as its `.notdef` glyph: there is no per-character
/// fallback to other faces and no color (COLR/CBDT/sbix) glyph support. Pick
/// a `fontFamily` that covers the text, or register one with
/// [`FontLibrary::load_font_file`].
pub struct Emojifier {
    fonts: Arc<FontLibrary>,
    pipeline: Pipeline,
}

impl Emojifier {
    /// Use the fonts installed on this machine
    pub fn new() -> Result<Self> {
        Self::with_fonts(FontLibrary::system())
    }

    /// Use a prepared font library, for example one with bundled faces
    pub fn with_fonts(fonts: FontLibrary) -> Result<Self> {
        let fonts = Arc::new(fonts);
        let pipeline = Pipeline::builder()
            .fonts(fonts.clone())
            .backend(Arc::new(SkiaBackend::new()))
            .exporter(Arc::new(PngExporter::new()))
            .build()?;
        log::debug!("Emojifier ready with {} font faces", fonts.face_count());
        Ok(Self { fonts, pipeline })
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Render one emoji
    pub fn render(&self, data: &EmojiData, style: &EmojiStyle) -> Result<GeneratedEmoji> {
        self.pipeline.render(data, style)
    }

    /// Render a batch in order, stopping at the first failure
    pub fn render_all(&self, items: &[EmojiData], style: &EmojiStyle) -> Result<Vec<GeneratedEmoji>> {
        self.pipeline.render_all(items, style)
    }

    #[cfg(feature = "parallel")]
    pub fn render_all_parallel(
        &self,
        items: &[EmojiData],
        style: &EmojiStyle,
    ) -> Result<Vec<GeneratedEmoji>> {
        self.pipeline.render_all_parallel(items, style)
    }

    /// Parse text-area input and render every line
    #[cfg(feature = "input")]
    pub fn render_text_input(&self, content: &str, style: &EmojiStyle) -> Result<Vec<GeneratedEmoji>> {
        let items = emojify_input::parse_text_input(content)?;
        self.render_all(&items, style)
    }

    /// Parse `text,filename` CSV and render every row
    #[cfg(feature = "input")]
    pub fn render_csv(&self, content: &str, style: &EmojiStyle) -> Result<Vec<GeneratedEmoji>> {
        let items = emojify_input::parse_csv(content)?;
        self.render_all(&items, style)
    }

    /// Render what a live preview of `content` would show
    #[cfg(feature = "input")]
    pub fn preview(&self, content: &str, style: &EmojiStyle) -> Result<GeneratedEmoji> {
        let data = EmojiData::new(emojify_input::preview_text(content), "preview");
        self.render(&data, style)
    }
}
