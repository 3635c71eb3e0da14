//! How an emoji should look
//!
//! [`EmojiStyle`] is the full render configuration for one batch. It is a
//! plain value: the pipeline never mutates it and never re-validates it.
//! Out-of-range numbers degrade through the fit loop's floor instead of
//! raising errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::EmojifyError, traits::FontRequest, Color};

/// CSS-style numeric font weight (100..=900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    /// Parse `"300"`..`"900"`, `"normal"` or `"bold"`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "normal" | "regular" => Some(Self::NORMAL),
            "bold" => Some(Self::BOLD),
            other => other
                .parse::<u16>()
                .ok()
                .filter(|w| (1..=1000).contains(w))
                .map(Self),
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FontWeight {
    type Err = EmojifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EmojifyError::Config(format!("Invalid font weight: {s:?}")))
    }
}

impl Serialize for FontWeight {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => Self::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid font weight {s:?}"))),
        }
    }
}

/// Upright or italic faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FromStr for FontStyle {
    type Err = EmojifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "italic" => Ok(Self::Italic),
            _ => Err(EmojifyError::Config(format!("Invalid font style: {s:?}"))),
        }
    }
}

/// Background silhouette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Filled disc; glyphs are clipped to it
    #[default]
    Circle,
    /// Rounded square (radius 8); no clipping
    Square,
}

impl FromStr for Shape {
    type Err = EmojifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            _ => Err(EmojifyError::Config(format!("Invalid shape: {s:?}"))),
        }
    }
}

/// Requested character arrangement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pick by character count
    #[default]
    Auto,
    Single,
    Horizontal,
    Vertical,
    Grid,
}

impl FromStr for Layout {
    type Err = EmojifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "single" => Ok(Self::Single),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "grid" => Ok(Self::Grid),
            _ => Err(EmojifyError::Config(format!("Invalid layout: {s:?}"))),
        }
    }
}

/// Complete render configuration for one emoji
///
/// Field names serialize in camelCase so style files written for the web
/// generator (`{"fontFamily": "Inter", "shadowBlur": 6, ...}`) load as-is.
/// Missing keys fall back to [`EmojiStyle::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmojiStyle {
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    /// Starting point of the fit search (8-120)
    pub font_size: f32,
    pub background_color: Color,
    /// 0..1, replaces the alpha of `background_color`
    pub background_opacity: f32,
    pub text_color: Color,
    pub shape: Shape,
    pub layout: Layout,
    /// Inset of the background shape on every side (0-30 px)
    pub padding: f32,
    /// 0 disables the border (0-8 px)
    pub border_width: f32,
    pub border_color: Color,
    pub shadow_enabled: bool,
    pub shadow_color: Color,
    /// 0-20
    pub shadow_blur: f32,
    pub highlight_enabled: bool,
    pub highlight_color: Color,
    /// Fraction of the font size (0.1-0.8)
    pub highlight_size: f32,
    /// 0.1-1.0
    pub highlight_opacity: f32,
}

impl EmojiStyle {
    /// Background fill with `background_opacity` applied
    pub fn fill_color(&self) -> Color {
        self.background_color.with_opacity(self.background_opacity)
    }

    /// What to ask the font provider for
    pub fn font_request(&self) -> FontRequest {
        FontRequest {
            family: self.font_family.clone(),
            weight: self.font_weight,
            style: self.font_style,
        }
    }
}

impl Default for EmojiStyle {
    fn default() -> Self {
        Self {
            font_family: "Noto Sans JP".to_string(),
            font_weight: FontWeight::MEDIUM,
            font_style: FontStyle::Normal,
            font_size: 48.0,
            background_color: Color::white(),
            background_opacity: 1.0,
            text_color: Color::black(),
            shape: Shape::Circle,
            layout: Layout::Auto,
            padding: 8.0,
            border_width: 0.0,
            border_color: Color::black(),
            shadow_enabled: true,
            shadow_color: Color::black(),
            shadow_blur: 4.0,
            highlight_enabled: false,
            highlight_color: Color::white(),
            highlight_size: 0.3,
            highlight_opacity: 0.6,
        }
    }
}
