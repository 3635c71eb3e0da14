//! Batch command: one PNG per input line

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use emojify::export::write_all;
use emojify::input::{parse_csv, parse_text_input};
use emojify::{EmojiData, EmojiStyle, Emojifier, GeneratedEmoji};

use crate::cli::BatchArgs;
use crate::commands::read_stdin;
use crate::style::{build_library, resolve_style};

pub fn run(args: &BatchArgs) -> Result<()> {
    let content = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    let items = if args.csv || args.input.as_deref().is_some_and(is_csv) {
        parse_csv(&content)?
    } else {
        parse_text_input(&content)?
    };

    let style = resolve_style(&args.style)?;
    let emojifier = Emojifier::with_fonts(build_library(&args.fonts)?)?;
    let emojis = render_items(&emojifier, &items, &style, args)?;
    let paths = write_all(&args.output, &emojis)?;

    log::info!("Wrote {} emoji to {}", paths.len(), args.output.display());
    if !args.quiet {
        for path in &paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(not(feature = "parallel"))]
fn render_items(
    emojifier: &Emojifier,
    items: &[EmojiData],
    style: &EmojiStyle,
    _args: &BatchArgs,
) -> Result<Vec<GeneratedEmoji>> {
    Ok(emojifier.render_all(items, style)?)
}

#[cfg(feature = "parallel")]
fn render_items(
    emojifier: &Emojifier,
    items: &[EmojiData],
    style: &EmojiStyle,
    args: &BatchArgs,
) -> Result<Vec<GeneratedEmoji>> {
    if args.jobs == 1 {
        return Ok(emojifier.render_all(items, style)?);
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs)
        .build()
        .context("Failed to start worker threads")?;
    log::debug!("Rendering on {} threads", pool.current_num_threads());
    Ok(pool.install(|| emojifier.render_all_parallel(items, style))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_detection() {
        assert!(is_csv(Path::new("list.csv")));
        assert!(is_csv(Path::new("LIST.CSV")));
        assert!(!is_csv(Path::new("list.txt")));
        assert!(!is_csv(Path::new("csv")));
    }
}
