//! Export module for emojify
//!
//! Turns finished bitmaps into PNG bytes and writes them out as
//! `<filename>.png`, the name chat platforms show on upload.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use emojify_core::{error::Result, GeneratedEmoji};

pub mod png;

pub use png::{encode_bitmap_to_png, PngExporter};

/// Write one emoji's blob into `dir`, creating the directory if needed
pub fn write_emoji(dir: impl AsRef<Path>, emoji: &GeneratedEmoji) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(emoji.download_name());
    fs::write(&path, &emoji.blob)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), emoji.blob.len());
    Ok(path)
}

/// Write a whole batch into `dir`, in order
///
/// Repeated filenames overwrite earlier files; each repeat is logged.
pub fn write_all(dir: impl AsRef<Path>, emojis: &[GeneratedEmoji]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::with_capacity(emojis.len());
    for emoji in emojis {
        if !seen.insert(emoji.download_name()) {
            log::warn!("{} appears more than once; keeping the last one", emoji.download_name());
        }
        paths.push(write_emoji(dir.as_ref(), emoji)?);
    }
    Ok(paths)
}
