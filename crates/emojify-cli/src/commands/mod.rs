pub mod batch;
pub mod fonts;
pub mod presets;
pub mod render;

use std::io::{self, Read};

use anyhow::{Context, Result};

pub(crate) fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
