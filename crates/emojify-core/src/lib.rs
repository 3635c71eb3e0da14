//! Emojify Core: from a short string to a 128×128 sticker
//!
//! Text enters as a few characters, exits as a square raster ready to be
//! uploaded as a chat emoji. This crate holds everything between those two
//! points that does not depend on a particular rasterizer:
//!
//! 1. **Layout selection** - [`layout`] decides between a single glyph, a
//!    side-by-side pair, a vertical stack or a grid
//! 2. **Fit sizing** - [`fit`] shrinks the font until every glyph fits its slot
//! 3. **Composition** - [`compose`] paints the background shape, the optional
//!    highlight gloss and the glyphs onto a [`Canvas`]
//! 4. **Pipeline** - [`Pipeline`] ties a font provider, a canvas backend and an
//!    exporter together and produces [`GeneratedEmoji`] values
//!
//! ## Build Your First Pipeline
//!
//! ```rust,ignore
//! use emojify_core::{EmojiData, EmojiStyle, Pipeline};
//! use std::sync::Arc;
//!
//! let pipeline = Pipeline::builder()
//!     .fonts(Arc::new(my_font_library))
//!     .backend(Arc::new(my_backend))
//!     .exporter(Arc::new(my_png_exporter))
//!     .build()?;
//!
//! let emoji = pipeline.render(&EmojiData::new("草", "kusa"), &EmojiStyle::default())?;
//! assert_eq!(emoji.image.width, 128);
//! ```
//!
//! ## The Traits That Power Everything
//!
//! - [`traits::FontRef`] - a loaded face: advances, metrics, outlines
//! - [`traits::FontProvider`] - turns a family/weight/style request into a face
//! - [`traits::Canvas`] - the drawing surface with scoped state
//! - [`traits::Backend`] - creates canvases
//! - [`traits::Exporter`] - encodes finished bitmaps

pub mod compose;
pub mod emoji;
pub mod error;
pub mod fit;
pub mod layout;
pub mod paint;
pub mod pipeline;
pub mod presets;
pub mod style;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use emoji::{EmojiData, GeneratedEmoji};
pub use error::{EmojifyError, Result};
pub use layout::{resolve_layout, LayoutPlan, ResolvedLayout};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use presets::{preset, presets, Preset};
pub use style::{EmojiStyle, FontStyle, FontWeight, Layout, Shape};
pub use traits::{Backend, Canvas, Exporter, FontProvider, FontRef, TextMeasurer};

/// Every emoji canvas is exactly this many pixels wide and tall.
pub const CANVAS_SIZE: u32 = 128;

/// Hard floor of the fit-size search, in pixels.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// The data structures that flow out of the pipeline
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// Raw pixel data of a finished canvas
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub format: BitmapFormat,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// Straight-alpha RGBA value at `(x, y)`, `None` outside the bitmap
        pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
            if x >= self.width || y >= self.height || self.format != BitmapFormat::Rgba8 {
                return None;
            }
            let idx = ((y * self.width + x) * 4) as usize;
            let px = self.data.get(idx..idx + 4)?;
            Some([px[0], px[1], px[2], px[3]])
        }
    }

    /// How pixels are arranged in the bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BitmapFormat {
        /// Straight (non-premultiplied) RGBA, 4 bytes per pixel
        Rgba8,
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.trim().trim_start_matches('#');
        let invalid = || EmojifyError::Config(format!("Invalid color: {input:?}"));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            },
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same RGB with alpha replaced by `opacity` (0..1, clamped)
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for Color {
    type Err = EmojifyError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::white());
        assert_eq!(Color::from_hex("000000").unwrap(), Color::black());
        assert_eq!(Color::from_hex("#f0a").unwrap(), Color::rgb(255, 0, 170));
        assert_eq!(
            Color::from_hex("#11223344").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_hex_roundtrip_display() {
        assert_eq!(Color::rgb(0x0a, 0x0a, 0x0a).to_hex(), "#0a0a0a");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_with_opacity() {
        let c = Color::rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!(c, Color::rgba(10, 20, 30, 128));
        assert_eq!(Color::white().with_opacity(2.0).a, 255);
        assert_eq!(Color::white().with_opacity(-1.0).a, 0);
    }

    #[test]
    fn test_bitmap_pixel_lookup() {
        let bitmap = types::BitmapData {
            width: 2,
            height: 1,
            format: types::BitmapFormat::Rgba8,
            data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        };
        assert_eq!(bitmap.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(bitmap.pixel(2, 0), None);
    }
}
