//! Skia Backend - anti-aliased emoji canvases via tiny-skia
//!
//! Every canvas is a premultiplied [`Pixmap`] plus a small state stack
//! (shadow, blend mode, clip mask). Shapes become tiny-skia paths, glyphs
//! are traced through [`FontRef::outline`] into a kurbo path and filled with
//! the winding rule, and drop shadows are painted into a side layer, blurred
//! and composited under the shape that cast them.

mod blur;
mod shapes;

use std::sync::Arc;

use emojify_core::{
    error::{RenderError, Result},
    paint::{BlendMode, Fill, Point, Shadow, ShapePath},
    traits::{advance_of, middle_to_baseline, Backend, Canvas, FontRef, TextMeasurer},
    types::{BitmapData, BitmapFormat},
    Color,
};
use tiny_skia::{
    FillRule, LinearGradient, Mask, Paint, Path, Pixmap, PixmapPaint, Shader, SpreadMode, Stroke,
    Transform,
};

use crate::shapes::{shape_path, to_skia_path, GlyphPen};

/// Horizontal shear applied when a face has to be slanted by hand
pub const OBLIQUE_SKEW: f32 = 0.2;

/// tiny-skia powered canvas factory
pub struct SkiaBackend {
    /// Largest canvas side handed out, keeps memory bounded
    max_size: u32,
}

impl SkiaBackend {
    pub fn new() -> Self {
        Self { max_size: 4096 }
    }
}

impl Default for SkiaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SkiaBackend {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn create_canvas(&self, size: u32, font: Arc<dyn FontRef>) -> Result<Box<dyn Canvas>> {
        if size == 0 || size > self.max_size {
            return Err(RenderError::InvalidDimensions {
                width: size,
                height: size,
            }
            .into());
        }
        Ok(Box::new(SkiaCanvas::new(size, font)?))
    }
}

#[derive(Clone, Default)]
struct DrawState {
    shadow: Option<Shadow>,
    blend_mode: BlendMode,
    clip: Option<Mask>,
}

/// A square tiny-skia surface bound to one face
pub struct SkiaCanvas {
    pixmap: Pixmap,
    font: Arc<dyn FontRef>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl SkiaCanvas {
    /// A fully transparent `size`×`size` canvas
    pub fn new(size: u32, font: Arc<dyn FontRef>) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::PixmapCreationFailed)?;
        Ok(Self {
            pixmap,
            font,
            state: DrawState::default(),
            stack: Vec::new(),
        })
    }

    /// Current save depth
    pub fn state_depth(&self) -> usize {
        self.stack.len()
    }

    fn paint(&self, shader: Shader<'static>) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.shader = shader;
        paint.anti_alias = true;
        paint.blend_mode = skia_blend(self.state.blend_mode);
        // lowp overlay overflows its u16 math on light colored backdrops
        paint.force_hq_pipeline = self.state.blend_mode != BlendMode::SourceOver;
        paint
    }

    /// Paint the shadow of `path` (if one is active), then `path` itself
    fn draw(&mut self, path: &Path, paint: &Paint, transform: Transform, stroke: Option<&Stroke>, alpha: u8) {
        if let Some(shadow) = self.state.shadow {
            self.cast_shadow(path, &shadow, transform, stroke, alpha);
        }
        let clip = self.state.clip.as_ref();
        match stroke {
            Some(stroke) => self.pixmap.stroke_path(path, paint, stroke, transform, clip),
            None => self
                .pixmap
                .fill_path(path, paint, FillRule::Winding, transform, clip),
        }
    }

    fn cast_shadow(
        &mut self,
        path: &Path,
        shadow: &Shadow,
        transform: Transform,
        stroke: Option<&Stroke>,
        alpha: u8,
    ) {
        let color = shadow.color;
        let shadow_alpha = (color.a as u16 * alpha as u16 / 255) as u8;
        let visible = shadow.blur > 0.0 || shadow.offset_x != 0.0 || shadow.offset_y != 0.0;
        if shadow_alpha == 0 || !visible {
            return;
        }

        let Some(mut layer) = Pixmap::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(color.r, color.g, color.b, shadow_alpha);
        match stroke {
            Some(stroke) => layer.stroke_path(path, &paint, stroke, transform, None),
            None => layer.fill_path(path, &paint, FillRule::Winding, transform, None),
        }

        // Canvas blur amounts are twice the Gaussian sigma
        blur::apply_gaussian_blur(&mut layer, shadow.blur / 2.0);

        let pixmap_paint = PixmapPaint {
            blend_mode: skia_blend(self.state.blend_mode),
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            shadow.offset_x.round() as i32,
            shadow.offset_y.round() as i32,
            layer.as_ref(),
            &pixmap_paint,
            Transform::identity(),
            self.state.clip.as_ref(),
        );
    }
}

impl TextMeasurer for SkiaCanvas {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        advance_of(self.font.as_ref(), text, size)
    }
}

impl Canvas for SkiaCanvas {
    fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.shadow = shadow;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend_mode = mode;
    }

    fn clip(&mut self, shape: &ShapePath) {
        let Some(path) = shape_path(shape) else {
            log::trace!("Skia: degenerate clip {:?}, clipping everything", shape);
            self.state.clip = Mask::new(self.pixmap.width(), self.pixmap.height());
            return;
        };
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        if let Some(existing) = &self.state.clip {
            combine_masks(&mut mask, existing);
        }
        self.state.clip = Some(mask);
    }

    fn fill(&mut self, shape: &ShapePath, fill: &Fill) {
        let Some(path) = shape_path(shape) else {
            return;
        };
        let (shader, alpha) = match fill {
            Fill::Solid(color) => (Shader::SolidColor(skia_color(*color)), color.a),
            Fill::LinearGradient { start, end, stops } => {
                let alpha = stops.iter().map(|s| s.color.a).max().unwrap_or(0);
                let stops = stops
                    .iter()
                    .map(|s| tiny_skia::GradientStop::new(s.offset, skia_color(s.color)))
                    .collect();
                let Some(shader) = LinearGradient::new(
                    skia_point(*start),
                    skia_point(*end),
                    stops,
                    SpreadMode::Pad,
                    Transform::identity(),
                ) else {
                    log::trace!("Skia: gradient could not be built, skipping fill");
                    return;
                };
                (shader, alpha)
            },
        };
        let paint = self.paint(shader);
        self.draw(&path, &paint, Transform::identity(), None, alpha);
    }

    fn stroke(&mut self, shape: &ShapePath, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let Some(path) = shape_path(shape) else {
            return;
        };
        let paint = self.paint(Shader::SolidColor(skia_color(color)));
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.draw(&path, &paint, Transform::identity(), Some(&stroke), color.a);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let font = self.font.clone();
        let scale = size / font.units_per_em().max(1) as f32;

        let mut pen = GlyphPen::new();
        let mut pen_x = 0.0;
        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch).unwrap_or_else(|| {
                log::warn!("Skia: face has no glyph for {:?}, drawing .notdef", ch);
                0
            });
            pen.origin = Point::new(pen_x, 0.0);
            if let Err(e) = font.outline(glyph_id, size, &mut pen) {
                log::warn!("Skia: no outline for {:?} (glyph {}): {}", ch, glyph_id, e);
            }
            pen_x += font.advance_width(glyph_id) * scale;
        }

        let Some(path) = to_skia_path(&pen.path) else {
            log::trace!("Skia: {:?} has no ink", text);
            return;
        };

        // Outlines are y-up on the baseline: flip, then move the run so its
        // advance is centered on x and its em box on y
        let skew = if font.synthetic_oblique() {
            OBLIQUE_SKEW
        } else {
            0.0
        };
        let baseline = y + middle_to_baseline(font.as_ref(), size);
        let transform = Transform::from_row(1.0, 0.0, skew, -1.0, x - pen_x / 2.0, baseline);

        let paint = self.paint(Shader::SolidColor(skia_color(color)));
        self.draw(&path, &paint, transform, None, color.a);
    }

    fn finish(self: Box<Self>) -> Result<BitmapData> {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        if data.len() != (width * height * 4) as usize {
            return Err(RenderError::BackendError("pixmap size mismatch".into()).into());
        }
        Ok(BitmapData {
            width,
            height,
            format: BitmapFormat::Rgba8,
            data,
        })
    }
}

fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn skia_point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x, p.y)
}

fn skia_blend(mode: BlendMode) -> tiny_skia::BlendMode {
    match mode {
        BlendMode::SourceOver => tiny_skia::BlendMode::SourceOver,
        BlendMode::Overlay => tiny_skia::BlendMode::Overlay,
    }
}

/// Multiply `into` by `existing`, giving the intersection of both clips
fn combine_masks(into: &mut Mask, existing: &Mask) {
    if into.width() != existing.width() || into.height() != existing.height() {
        return;
    }
    for (dst, src) in into.data_mut().iter_mut().zip(existing.data().iter()) {
        *dst = ((*dst as u16 * *src as u16 + 127) / 255) as u8;
    }
}
