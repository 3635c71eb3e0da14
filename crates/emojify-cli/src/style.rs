//! Turning style flags into an `EmojiStyle`

use std::fs;

use anyhow::{bail, Context, Result};
use emojify::{fontdb::FontLibrary, presets, EmojiStyle};
use serde_json::Value;

use crate::cli::{FontArgs, StyleArgs};

/// Preset, then the JSON style file on top, then individual flags
pub fn resolve_style(args: &StyleArgs) -> Result<EmojiStyle> {
    let Some(preset) = emojify::preset(&args.preset) else {
        let known: Vec<_> = presets().iter().map(|p| p.id).collect();
        bail!("Unknown preset {:?} (known: {})", args.preset, known.join(", "));
    };
    let mut style = preset.style;

    if let Some(path) = &args.style {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        style = merge_json(&style, &raw)
            .with_context(|| format!("Invalid style file {}", path.display()))?;
    }

    apply_overrides(&mut style, args);
    log::debug!("Resolved style: {style:?}");
    Ok(style)
}

/// Overlay the keys of a (possibly partial) JSON object on `base`
fn merge_json(base: &EmojiStyle, raw: &str) -> Result<EmojiStyle> {
    let Value::Object(overlay) = serde_json::from_str::<Value>(raw)? else {
        bail!("expected a JSON object");
    };
    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overlay);
    }
    Ok(serde_json::from_value(merged)?)
}

fn apply_overrides(style: &mut EmojiStyle, args: &StyleArgs) {
    if let Some(family) = &args.font_family {
        style.font_family = family.clone();
    }
    set(&mut style.font_weight, args.font_weight);
    set(&mut style.font_style, args.font_style);
    set(&mut style.font_size, args.font_size);
    set(&mut style.background_color, args.background);
    set(&mut style.background_opacity, args.background_opacity);
    set(&mut style.text_color, args.text_color);
    set(&mut style.shape, args.shape);
    set(&mut style.layout, args.layout);
    set(&mut style.padding, args.padding);
    set(&mut style.border_width, args.border_width);
    set(&mut style.border_color, args.border_color);
    set(&mut style.shadow_color, args.shadow_color);
    set(&mut style.shadow_blur, args.shadow_blur);
    set(&mut style.highlight_color, args.highlight_color);
    set(&mut style.highlight_size, args.highlight_size);
    set(&mut style.highlight_opacity, args.highlight_opacity);

    if args.shadow {
        style.shadow_enabled = true;
    }
    if args.no_shadow {
        style.shadow_enabled = false;
    }
    if args.highlight {
        style.highlight_enabled = true;
    }
    if args.no_highlight {
        style.highlight_enabled = false;
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Font library built from `--font-file`, `--font-dir` and system fonts
pub fn build_library(args: &FontArgs) -> Result<FontLibrary> {
    let mut library = if args.no_system_fonts {
        FontLibrary::empty()
    } else {
        FontLibrary::system()
    };
    for dir in &args.font_dirs {
        library.load_fonts_dir(dir);
    }
    for file in &args.font_files {
        library
            .load_font_file(file)
            .with_context(|| format!("Failed to load font {}", file.display()))?;
    }
    log::debug!("{} font faces available", library.face_count());
    Ok(library)
}
