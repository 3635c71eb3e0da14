//! Render command: one emoji into one PNG

use anyhow::{bail, Context, Result};
use emojify::export::write_emoji;
use emojify::input::{parse_text_input, preview_text, MAX_FILENAME_CHARS};
use emojify::Emojifier;

use crate::cli::RenderArgs;
use crate::commands::read_stdin;
use crate::style::{build_library, resolve_style};

pub fn run(args: &RenderArgs) -> Result<()> {
    // Piped input behaves like the live preview: first line, text part only
    let text = match &args.text {
        Some(text) => text.clone(),
        None => preview_text(&read_stdin()?),
    };

    let items = parse_text_input(&text)?;
    if items.len() > 1 {
        log::warn!(
            "Rendering only the first of {} lines; use `emojify batch` for the rest",
            items.len()
        );
    }
    let mut data = items
        .into_iter()
        .next()
        .context("Nothing to render")?;

    if let Some(filename) = &args.filename {
        check_filename(filename)?;
        data.filename = filename.clone();
    }

    let style = resolve_style(&args.style)?;
    let emojifier = Emojifier::with_fonts(build_library(&args.fonts)?)?;
    let emoji = emojifier.render(&data, &style)?;
    let path = write_emoji(&args.output, &emoji)?;

    log::info!("Rendered {:?} to {}", data.text, path.display());
    if !args.quiet {
        println!("{}", path.display());
    }
    Ok(())
}

fn check_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        bail!("File name cannot be empty");
    }
    if filename.chars().count() > MAX_FILENAME_CHARS {
        bail!("File name must be at most {MAX_FILENAME_CHARS} characters");
    }
    if filename.contains(['/', '\\']) {
        bail!("File name cannot contain path separators: {filename:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_filename() {
        assert!(check_filename("kusa").is_ok());
        assert!(check_filename(" ").is_err());
        assert!(check_filename(&"a".repeat(33)).is_err());
        assert!(check_filename("../kusa").is_err());
    }
}
