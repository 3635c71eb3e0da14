//! What goes into the pipeline and what comes out of it

use crate::types::BitmapData;

/// Display names longer than this many characters are truncated.
pub const NAME_MAX_CHARS: usize = 10;

/// One validated render request
///
/// Produced by input parsing, consumed by [`crate::Pipeline::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiData {
    /// Display name: `text`, truncated to ten characters plus `...`
    pub name: String,
    /// The characters to draw (1-20)
    pub text: String,
    /// Output file stem (1-32 chars, no extension)
    pub filename: String,
}

impl EmojiData {
    /// Build a request, deriving the display name from `text`
    pub fn new(text: impl Into<String>, filename: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: display_name(&text),
            text,
            filename: filename.into(),
        }
    }
}

/// `text` itself, or its first ten characters followed by `...`
pub fn display_name(text: &str) -> String {
    if text.chars().count() > NAME_MAX_CHARS {
        let head: String = text.chars().take(NAME_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// A finished emoji, owned by the caller
#[derive(Debug, Clone)]
pub struct GeneratedEmoji {
    pub name: String,
    pub filename: String,
    /// The 128×128 raster
    pub image: BitmapData,
    /// Encoded bytes (PNG with the default exporter)
    pub blob: Vec<u8>,
}

impl GeneratedEmoji {
    /// File name to use when saving or archiving the blob
    pub fn download_name(&self) -> String {
        format!("{}.png", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BitmapFormat;

    #[test]
    fn test_short_name_kept() {
        let data = EmojiData::new("やったね", "yattane");
        assert_eq!(data.name, "やったね");
        assert_eq!(data.filename, "yattane");
    }

    #[test]
    fn test_long_name_truncated() {
        let data = EmojiData::new("これはとても長いテキストです", "long");
        assert_eq!(data.name, "これはとても長いテキ...");
        assert_eq!(data.name.chars().count(), 13);
        assert_eq!(data.text, "これはとても長いテキストです");
    }

    #[test]
    fn test_exactly_ten_chars_not_truncated() {
        assert_eq!(display_name("abcdefghij"), "abcdefghij");
        assert_eq!(display_name("abcdefghijk"), "abcdefghij...");
    }

    #[test]
    fn test_download_name() {
        let emoji = GeneratedEmoji {
            name: "草".into(),
            filename: "kusa".into(),
            image: BitmapData {
                width: 1,
                height: 1,
                format: BitmapFormat::Rgba8,
                data: vec![0; 4],
            },
            blob: vec![],
        };
        assert_eq!(emoji.download_name(), "kusa.png");
    }
}
