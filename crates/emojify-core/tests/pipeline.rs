use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use emojify_core::{
    error::{ExportError, FontLoadError, RenderError},
    paint::{BlendMode, Fill, Shadow, ShapePath},
    traits::{advance_of, FixedFont, FontRequest, OutlinePen},
    types::{BitmapData, BitmapFormat, GlyphId},
    Backend, Canvas, Color, EmojiData, EmojiStyle, EmojifyError, Exporter, FontProvider, FontRef,
    Pipeline, Result, TextMeasurer,
};

struct StubFont;

impl FontRef for StubFont {
    fn data(&self) -> &[u8] {
        &[]
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        Some(ch as u32)
    }

    fn advance_width(&self, _: GlyphId) -> f32 {
        1000.0
    }

    fn outline(&self, _: GlyphId, _: f32, _: &mut dyn OutlinePen) -> Result<()> {
        Ok(())
    }
}

/// Paints nothing; remembers the text it was asked to draw
struct TextLog {
    size: u32,
    font: Arc<dyn FontRef>,
    texts: Arc<Mutex<Vec<String>>>,
}

impl TextMeasurer for TextLog {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        advance_of(self.font.as_ref(), text, size)
    }
}

impl Canvas for TextLog {
    fn size(&self) -> u32 {
        self.size
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_shadow(&mut self, _: Option<Shadow>) {}
    fn set_blend_mode(&mut self, _: BlendMode) {}
    fn clip(&mut self, _: &ShapePath) {}
    fn fill(&mut self, _: &ShapePath, _: &Fill) {}
    fn stroke(&mut self, _: &ShapePath, _: Color, _: f32) {}
    fn fill_text(&mut self, text: &str, _: f32, _: f32, _: f32, _: Color) {
        if let Ok(mut texts) = self.texts.lock() {
            texts.push(text.to_string());
        }
    }
    fn finish(self: Box<Self>) -> Result<BitmapData> {
        Ok(BitmapData {
            width: self.size,
            height: self.size,
            format: BitmapFormat::Rgba8,
            data: vec![0; (self.size * self.size * 4) as usize],
        })
    }
}

#[derive(Default)]
struct LogBackend {
    texts: Arc<Mutex<Vec<String>>>,
    unreadable: bool,
}

struct UnreadableCanvas(TextLog);

impl TextMeasurer for UnreadableCanvas {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.0.measure_text(text, size)
    }
}

impl Canvas for UnreadableCanvas {
    fn size(&self) -> u32 {
        self.0.size()
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_shadow(&mut self, _: Option<Shadow>) {}
    fn set_blend_mode(&mut self, _: BlendMode) {}
    fn clip(&mut self, _: &ShapePath) {}
    fn fill(&mut self, _: &ShapePath, _: &Fill) {}
    fn stroke(&mut self, _: &ShapePath, _: Color, _: f32) {}
    fn fill_text(&mut self, _: &str, _: f32, _: f32, _: f32, _: Color) {}
    fn finish(self: Box<Self>) -> Result<BitmapData> {
        Err(RenderError::PixmapCreationFailed.into())
    }
}

impl Backend for LogBackend {
    fn name(&self) -> &'static str {
        "log"
    }

    fn create_canvas(&self, size: u32, font: Arc<dyn FontRef>) -> Result<Box<dyn Canvas>> {
        let canvas = TextLog {
            size,
            font,
            texts: self.texts.clone(),
        };
        if self.unreadable {
            Ok(Box::new(UnreadableCanvas(canvas)))
        } else {
            Ok(Box::new(canvas))
        }
    }
}

/// Emits the pixel count as bytes; fails on the call numbered `fail_on`
struct CountingExporter {
    calls: AtomicUsize,
    fail_on: Option<usize>,
}

impl CountingExporter {
    fn new(fail_on: Option<usize>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on,
        }
    }
}

impl Exporter for CountingExporter {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if Some(call) == self.fail_on {
            return Err(ExportError::EncodingFailed("boom".into()).into());
        }
        Ok((bitmap.width * bitmap.height).to_le_bytes().to_vec())
    }

    fn extension(&self) -> &'static str {
        "bin"
    }

    fn mime_type(&self) -> &'static str {
        "application/octet-stream"
    }
}

struct NoFonts;

impl FontProvider for NoFonts {
    fn resolve(&self, request: &FontRequest) -> Result<Arc<dyn FontRef>> {
        Err(FontLoadError::FamilyNotFound(request.family.clone()).into())
    }
}

fn pipeline(backend: LogBackend, exporter: Arc<CountingExporter>) -> Pipeline {
    Pipeline::builder()
        .fonts(Arc::new(FixedFont(Arc::new(StubFont))))
        .backend(Arc::new(backend))
        .exporter(exporter)
        .build()
        .unwrap()
}

fn items() -> Vec<EmojiData> {
    vec![
        EmojiData::new("草", "kusa"),
        EmojiData::new("やばい", "yabai"),
        EmojiData::new("おつかれ", "otsukare"),
    ]
}

#[test]
fn render_produces_fixed_size_image_and_blob() {
    let pipeline = pipeline(LogBackend::default(), Arc::new(CountingExporter::new(None)));
    let emoji = pipeline
        .render(&EmojiData::new("草", "kusa"), &EmojiStyle::default())
        .unwrap();

    assert_eq!(pipeline.canvas_size(), 128);
    assert_eq!((emoji.image.width, emoji.image.height), (128, 128));
    assert_eq!(emoji.blob, 16384u32.to_le_bytes().to_vec());
    assert_eq!(emoji.name, "草");
    assert_eq!(emoji.download_name(), "kusa.png");
}

#[test]
fn render_draws_every_layout_unit() {
    let backend = LogBackend::default();
    let texts = backend.texts.clone();
    let pipeline = pipeline(backend, Arc::new(CountingExporter::new(None)));

    pipeline
        .render(&EmojiData::new("おつかれ", "otsukare"), &EmojiStyle::default())
        .unwrap();
    assert_eq!(*texts.lock().unwrap(), vec!["お", "つ", "か", "れ"]);
}

#[test]
fn render_all_keeps_input_order() {
    let pipeline = pipeline(LogBackend::default(), Arc::new(CountingExporter::new(None)));
    let out = pipeline.render_all(&items(), &EmojiStyle::default()).unwrap();

    let names: Vec<&str> = out.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(names, vec!["kusa", "yabai", "otsukare"]);
}

#[test]
fn render_all_fails_fast_on_encoding_error() {
    let exporter = Arc::new(CountingExporter::new(Some(2)));
    let pipeline = pipeline(LogBackend::default(), exporter.clone());

    let err = pipeline
        .render_all(&items(), &EmojiStyle::default())
        .unwrap_err();
    assert!(err.is_encoding());
    assert_eq!(err.to_string(), "Encoding failed: boom");
    // The third item is never encoded
    assert_eq!(exporter.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn unreadable_surface_is_an_encoding_error() {
    let backend = LogBackend {
        unreadable: true,
        ..LogBackend::default()
    };
    let pipeline = pipeline(backend, Arc::new(CountingExporter::new(None)));

    let err = pipeline
        .render(&EmojiData::new("草", "kusa"), &EmojiStyle::default())
        .unwrap_err();
    assert!(err.is_encoding(), "got {err}");
}

#[test]
fn missing_font_is_reported_before_drawing() {
    let backend = LogBackend::default();
    let texts = backend.texts.clone();
    let pipeline = Pipeline::builder()
        .fonts(Arc::new(NoFonts))
        .backend(Arc::new(backend))
        .exporter(Arc::new(CountingExporter::new(None)))
        .build()
        .unwrap();

    let err = pipeline
        .render_all(&items(), &EmojiStyle::default())
        .unwrap_err();
    assert!(matches!(err, EmojifyError::FontLoad(_)));
    assert!(texts.lock().unwrap().is_empty());
}

#[test]
fn builder_requires_every_part() {
    let err = Pipeline::builder()
        .backend(Arc::new(LogBackend::default()))
        .exporter(Arc::new(CountingExporter::new(None)))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, EmojifyError::Config(_)));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_batch_matches_sequential() {
    let pipeline = pipeline(LogBackend::default(), Arc::new(CountingExporter::new(None)));
    let style = EmojiStyle::default();
    let seq = pipeline.render_all(&items(), &style).unwrap();
    let par = pipeline.render_all_parallel(&items(), &style).unwrap();

    let names = |v: &[emojify_core::GeneratedEmoji]| -> Vec<String> {
        v.iter().map(|e| e.filename.clone()).collect()
    };
    assert_eq!(names(&seq), names(&par));
}
