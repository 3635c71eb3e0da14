//! Presets command

use anyhow::{Context, Result};
use emojify::{preset, presets};

use crate::cli::PresetsArgs;

pub fn run(args: &PresetsArgs) -> Result<()> {
    match &args.id {
        Some(id) => {
            let preset = preset(id).with_context(|| format!("Unknown preset {id:?}"))?;
            println!("{}", serde_json::to_string_pretty(&preset.style)?);
        },
        None => {
            for preset in presets() {
                println!("{:<16} {} - {}", preset.id, preset.name, preset.description);
            }
        },
    }
    Ok(())
}
