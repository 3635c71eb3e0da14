//! Command-line arguments, defined with clap's derive API

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use emojify::{Color, FontStyle, FontWeight, Layout, Shape};

/// Emojify - turn short text into 128x128 chat emoji
#[derive(Parser, Debug)]
#[command(name = "emojify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one emoji
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Render one emoji per line of a text or CSV file
    #[command(alias = "b")]
    Batch(Box<BatchArgs>),

    /// List the built-in style presets, or print one as JSON
    Presets(PresetsArgs),

    /// List the font families available for rendering
    Fonts(FontsArgs),
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text to draw, optionally `text,filename` (first line of stdin if omitted)
    pub text: Option<String>,

    /// Output file stem; derived from the text when omitted
    #[arg(short = 'n', long = "filename")]
    pub filename: Option<String>,

    /// Directory the PNG is written into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Don't print the written path
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub fonts: FontArgs,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file with one emoji per line (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Require `text,filename` on every line (implied by a .csv input)
    #[arg(long)]
    pub csv: bool,

    /// Directory the PNGs are written into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Worker threads (0 lets rayon decide)
    #[cfg(feature = "parallel")]
    #[arg(short, long, default_value = "1")]
    pub jobs: usize,

    /// Don't print the written paths
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub fonts: FontArgs,
}

/// Arguments for the presets command
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print this preset's full style as JSON
    pub id: Option<String>,
}

/// Arguments for the fonts command
#[derive(Args, Debug)]
pub struct FontsArgs {
    /// Only list families whose name contains this (case-insensitive)
    pub filter: Option<String>,

    #[command(flatten)]
    pub fonts: FontArgs,
}

/// Where faces come from
#[derive(Args, Debug, Clone, Default)]
pub struct FontArgs {
    /// Extra font file to register (repeatable)
    #[arg(long = "font-file", value_name = "PATH")]
    pub font_files: Vec<PathBuf>,

    /// Directory scanned for extra fonts (repeatable)
    #[arg(long = "font-dir", value_name = "DIR")]
    pub font_dirs: Vec<PathBuf>,

    /// Skip the fonts installed on this machine
    #[arg(long)]
    pub no_system_fonts: bool,
}

/// Style layers: preset, then `--style` JSON, then the individual flags
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Built-in preset to start from
    #[arg(short, long, default_value = "default")]
    pub preset: String,

    /// JSON style file; keys it leaves out keep the preset's values
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    #[arg(long)]
    pub font_family: Option<String>,

    /// 300-900, normal or bold
    #[arg(long)]
    pub font_weight: Option<FontWeight>,

    /// normal or italic
    #[arg(long)]
    pub font_style: Option<FontStyle>,

    /// Largest font size the fit search starts from
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Background color (#rgb, #rrggbb or #rrggbbaa)
    #[arg(long, value_name = "COLOR")]
    pub background: Option<Color>,

    #[arg(long, value_name = "0..1")]
    pub background_opacity: Option<f32>,

    #[arg(long, value_name = "COLOR")]
    pub text_color: Option<Color>,

    /// circle or square
    #[arg(long)]
    pub shape: Option<Shape>,

    /// auto, single, horizontal, vertical or grid
    #[arg(long)]
    pub layout: Option<Layout>,

    #[arg(long)]
    pub padding: Option<f32>,

    #[arg(long)]
    pub border_width: Option<f32>,

    #[arg(long, value_name = "COLOR")]
    pub border_color: Option<Color>,

    #[arg(long, overrides_with = "no_shadow")]
    pub shadow: bool,

    #[arg(long, overrides_with = "shadow")]
    pub no_shadow: bool,

    #[arg(long, value_name = "COLOR")]
    pub shadow_color: Option<Color>,

    #[arg(long)]
    pub shadow_blur: Option<f32>,

    #[arg(long, overrides_with = "no_highlight")]
    pub highlight: bool,

    #[arg(long, overrides_with = "highlight")]
    pub no_highlight: bool,

    #[arg(long, value_name = "COLOR")]
    pub highlight_color: Option<Color>,

    /// Fraction of the font size
    #[arg(long)]
    pub highlight_size: Option<f32>,

    #[arg(long, value_name = "0..1")]
    pub highlight_opacity: Option<f32>,
}
