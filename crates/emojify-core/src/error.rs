//! Error types for emojify

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmojifyError>;

/// Main error type for emojify
#[derive(Debug, Error)]
pub enum EmojifyError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] RenderError),

    /// Raster-to-bytes conversion failed. Surfaced verbatim, batches abort on it.
    #[error("Encoding failed: {0}")]
    Encoding(#[from] ExportError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl EmojifyError {
    /// True for failures raised while turning a finished raster into bytes
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("No font available for family: {0}")]
    FamilyNotFound(String),

    #[error("Font database is empty")]
    NoFonts,
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to create pixmap")]
    PixmapCreationFailed,

    #[error("Glyph outline extraction failed for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("{0}")]
    EncodingFailed(String),
}
