//! The engine that turns `(text, style)` pairs into finished emoji
//!
//! Font → Canvas → Compose → Finish → Export, once per item.

use std::sync::Arc;

use crate::{
    compose::compose,
    emoji::{EmojiData, GeneratedEmoji},
    error::{EmojifyError, ExportError, Result},
    style::EmojiStyle,
    traits::{Backend, Exporter, FontProvider, FontRef},
    CANVAS_SIZE,
};

/// Render pipeline for emoji
///
/// ```ignore
/// use emojify_core::Pipeline;
///
/// let pipeline = Pipeline::builder()
///     .fonts(Arc::new(library))
///     .backend(Arc::new(SkiaBackend::new()))
///     .exporter(Arc::new(PngExporter::new()))
///     .build()?;
///
/// let emojis = pipeline.render_all(&items, &style)?;
/// ```
pub struct Pipeline {
    fonts: Arc<dyn FontProvider>,
    backend: Arc<dyn Backend>,
    exporter: Arc<dyn Exporter>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Side length of every canvas this pipeline allocates
    pub fn canvas_size(&self) -> u32 {
        CANVAS_SIZE
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn exporter_name(&self) -> &'static str {
        self.exporter.name()
    }

    /// Render one emoji
    pub fn render(&self, data: &EmojiData, style: &EmojiStyle) -> Result<GeneratedEmoji> {
        let font = self.fonts.resolve(&style.font_request())?;
        self.render_with_font(data, style, font)
    }

    /// Render a batch in order, stopping at the first failure
    ///
    /// The face is resolved once for the whole batch. On error nothing is
    /// returned for the items that did succeed.
    pub fn render_all(&self, items: &[EmojiData], style: &EmojiStyle) -> Result<Vec<GeneratedEmoji>> {
        let font = self.fonts.resolve(&style.font_request())?;
        log::debug!("Rendering batch of {} with {}", items.len(), self.backend.name());
        items
            .iter()
            .map(|data| self.render_with_font(data, style, font.clone()))
            .collect()
    }

    /// Like [`render_all`](Self::render_all) but spreads items across the rayon pool
    ///
    /// Output order matches input order. Items already in flight when one
    /// fails may still finish, but their results are discarded.
    #[cfg(feature = "parallel")]
    pub fn render_all_parallel(
        &self,
        items: &[EmojiData],
        style: &EmojiStyle,
    ) -> Result<Vec<GeneratedEmoji>> {
        use rayon::prelude::*;

        let font = self.fonts.resolve(&style.font_request())?;
        log::debug!("Rendering batch of {} in parallel", items.len());
        items
            .par_iter()
            .map(|data| self.render_with_font(data, style, font.clone()))
            .collect()
    }

    fn render_with_font(
        &self,
        data: &EmojiData,
        style: &EmojiStyle,
        font: Arc<dyn FontRef>,
    ) -> Result<GeneratedEmoji> {
        let mut canvas = self.backend.create_canvas(CANVAS_SIZE, font)?;
        compose(canvas.as_mut(), &data.text, style);

        // A surface that cannot be read back counts as an encoding failure
        let image = canvas.finish().map_err(into_encoding)?;
        let blob = self.exporter.export(&image).map_err(into_encoding)?;

        log::debug!(
            "Rendered {:?} -> {} ({} bytes)",
            data.text,
            data.filename,
            blob.len()
        );
        Ok(GeneratedEmoji {
            name: data.name.clone(),
            filename: data.filename.clone(),
            image,
            blob,
        })
    }
}

fn into_encoding(err: EmojifyError) -> EmojifyError {
    if err.is_encoding() {
        err
    } else {
        EmojifyError::Encoding(ExportError::EncodingFailed(err.to_string()))
    }
}

/// Build pipelines piece by piece
///
/// All three collaborators are required. Canvases are always
/// [`CANVAS_SIZE`] square.
pub struct PipelineBuilder {
    fonts: Option<Arc<dyn FontProvider>>,
    backend: Option<Arc<dyn Backend>>,
    exporter: Option<Arc<dyn Exporter>>,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self {
            fonts: None,
            backend: None,
            exporter: None,
        }
    }

    /// Choose where faces come from
    pub fn fonts(mut self, fonts: Arc<dyn FontProvider>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Choose who turns drawing commands into pixels
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Choose who packages the final output
    pub fn exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Result<Pipeline> {
        let fonts = self
            .fonts
            .ok_or_else(|| EmojifyError::Config("No font provider configured".into()))?;
        let backend = self
            .backend
            .ok_or_else(|| EmojifyError::Config("No backend configured".into()))?;
        let exporter = self
            .exporter
            .ok_or_else(|| EmojifyError::Config("No exporter configured".into()))?;
        Ok(Pipeline {
            fonts,
            backend,
            exporter,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
