//! Built-in style presets

use crate::{
    style::{EmojiStyle, FontStyle, FontWeight, Layout, Shape},
    Color,
};

/// A named, ready-to-use style
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub style: EmojiStyle,
}

/// Look up a preset by id
pub fn preset(id: &str) -> Option<Preset> {
    presets().into_iter().find(|p| p.id == id)
}

/// All built-in presets, `default` first
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "default",
            name: "Default",
            description: "Plain white disc with a soft shadow",
            style: EmojiStyle::default(),
        },
        Preset {
            id: "neon-glow",
            name: "Neon Glow",
            description: "Cyberpunk cyan on black with a glowing border",
            style: EmojiStyle {
                font_family: "Orbitron".into(),
                font_weight: FontWeight::BOLD,
                background_color: hex(0x0a, 0x0a, 0x0a),
                text_color: hex(0x00, 0xff, 0xff),
                shape: Shape::Square,
                border_width: 2.0,
                border_color: hex(0x00, 0xff, 0xff),
                shadow_color: hex(0x00, 0xff, 0xff),
                shadow_blur: 15.0,
                highlight_enabled: true,
                highlight_size: 0.4,
                highlight_opacity: 0.8,
                ..base()
            },
        },
        Preset {
            id: "kawaii-pink",
            name: "Kawaii Pink",
            description: "Fluffy pastel pink",
            style: EmojiStyle {
                font_family: "Comfortaa".into(),
                font_weight: FontWeight(600),
                font_size: 44.0,
                background_color: hex(0xff, 0xb3, 0xd9),
                text_color: Color::white(),
                padding: 12.0,
                border_width: 3.0,
                border_color: hex(0xff, 0x80, 0xcc),
                shadow_color: hex(0xff, 0x99, 0xd6),
                shadow_blur: 8.0,
                highlight_enabled: true,
                highlight_size: 0.5,
                highlight_opacity: 0.7,
                ..base()
            },
        },
        Preset {
            id: "retro-gaming",
            name: "Retro Gaming",
            description: "8-bit console gold on purple",
            style: EmojiStyle {
                font_family: "Fredoka One".into(),
                font_weight: FontWeight::NORMAL,
                font_size: 42.0,
                background_color: hex(0x2d, 0x1b, 0x69),
                text_color: hex(0xff, 0xd7, 0x00),
                shape: Shape::Square,
                padding: 6.0,
                border_width: 4.0,
                border_color: hex(0x8b, 0x5c, 0xf6),
                shadow_enabled: false,
                shadow_blur: 0.0,
                ..base()
            },
        },
        Preset {
            id: "minimalist",
            name: "Minimalist",
            description: "Quiet grey type on a white tile",
            style: EmojiStyle {
                font_family: "Inter".into(),
                font_size: 46.0,
                text_color: hex(0x1f, 0x29, 0x37),
                shape: Shape::Square,
                padding: 10.0,
                border_width: 1.0,
                border_color: hex(0xe5, 0xe7, 0xeb),
                shadow_color: hex(0x6b, 0x72, 0x80),
                highlight_size: 0.2,
                highlight_opacity: 0.4,
                ..base()
            },
        },
        Preset {
            id: "gradient-sunset",
            name: "Sunset",
            description: "Warm coral disc with a glossy highlight",
            style: EmojiStyle {
                font_family: "Poppins".into(),
                font_weight: FontWeight::BOLD,
                font_size: 45.0,
                background_color: hex(0xff, 0x6b, 0x6b),
                text_color: Color::white(),
                border_color: Color::white(),
                shadow_color: hex(0xff, 0x99, 0x99),
                shadow_blur: 12.0,
                highlight_enabled: true,
                highlight_size: 0.4,
                ..base()
            },
        },
        Preset {
            id: "dark-mode",
            name: "Dark Mode",
            description: "Modern dark tile",
            style: EmojiStyle {
                font_family: "Roboto".into(),
                font_weight: FontWeight(600),
                font_size: 44.0,
                background_color: hex(0x1f, 0x29, 0x37),
                text_color: hex(0xf9, 0xfa, 0xfb),
                shape: Shape::Square,
                padding: 10.0,
                border_width: 1.0,
                border_color: hex(0x37, 0x41, 0x51),
                shadow_blur: 6.0,
                highlight_opacity: 0.5,
                ..base()
            },
        },
    ]
}

fn base() -> EmojiStyle {
    EmojiStyle {
        font_style: FontStyle::Normal,
        layout: Layout::Auto,
        ..EmojiStyle::default()
    }
}

const fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}
