//! Fonts command

use anyhow::Result;

use crate::cli::FontsArgs;
use crate::style::build_library;

pub fn run(args: &FontsArgs) -> Result<()> {
    let library = build_library(&args.fonts)?;
    let filter = args.filter.as_deref().map(str::to_lowercase);

    let families: Vec<String> = library
        .families()
        .into_iter()
        .filter(|name| {
            filter
                .as_deref()
                .is_none_or(|needle| name.to_lowercase().contains(needle))
        })
        .collect();

    if families.is_empty() {
        eprintln!("No matching font families ({} faces indexed)", library.face_count());
    }
    for family in families {
        println!("{family}");
    }
    Ok(())
}
