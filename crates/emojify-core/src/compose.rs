//! Paint one emoji onto a canvas: background, highlight gloss, glyphs
//!
//! Drawing order matters. The background phase runs first and, for circles,
//! leaves a clip in place that every later phase inherits. Each glyph's
//! highlight is painted before the glyph itself so the overlay blends
//! against the background and the text stays crisp on top.

use crate::{
    fit::{fit_layout, FitResult, Placement},
    layout::resolve_layout,
    paint::{BlendMode, Fill, GradientStop, Point, Shadow, ShapePath},
    style::{EmojiStyle, Shape},
    traits::{scoped, Canvas},
};

/// Drop shadow offset in pixels, both axes
pub const SHADOW_OFFSET: f32 = 2.0;

/// Corner radius of the square background
pub const SQUARE_CORNER_RADIUS: f32 = 8.0;

/// Highlight band starts this many font sizes above the glyph's middle
const HIGHLIGHT_RISE: f32 = 0.3;
/// Horizontal radius of the gloss ellipse is the glyph width over this
const HIGHLIGHT_WIDTH_DIVISOR: f32 = 2.2;
/// Opacity of the middle gradient stop relative to the first
const HIGHLIGHT_MID_FADE: f32 = 0.8;

/// Outline of the background for `style` on a `canvas_size` square
pub fn background_shape(style: &EmojiStyle, canvas_size: f32) -> ShapePath {
    let side = (canvas_size - 2.0 * style.padding).max(0.0);
    match style.shape {
        Shape::Circle => ShapePath::Circle {
            center: Point::new(canvas_size / 2.0, canvas_size / 2.0),
            radius: side / 2.0,
        },
        Shape::Square => ShapePath::RoundedRect {
            x: style.padding,
            y: style.padding,
            width: side,
            height: side,
            radius: SQUARE_CORNER_RADIUS,
        },
    }
}

/// The shadow the background casts, if enabled
pub fn background_shadow(style: &EmojiStyle) -> Option<Shadow> {
    style.shadow_enabled.then_some(Shadow {
        color: style.shadow_color,
        blur: style.shadow_blur,
        offset_x: SHADOW_OFFSET,
        offset_y: SHADOW_OFFSET,
    })
}

/// Fill the background shape, stroke the border, clip to circles
///
/// The shadow is scoped to the fill alone; the border and everything drawn
/// afterwards cast none. The circle clip is left active on return.
pub fn draw_background(canvas: &mut dyn Canvas, style: &EmojiStyle) {
    let shape = background_shape(style, canvas.size() as f32);
    let fill = Fill::Solid(style.fill_color());

    scoped(canvas, |c| {
        c.set_shadow(background_shadow(style));
        c.fill(&shape, &fill);
    });

    if style.border_width > 0.0 {
        canvas.stroke(&shape, style.border_color, style.border_width);
    }

    if style.shape == Shape::Circle {
        canvas.clip(&shape);
    }
}

/// Gloss ellipse and gradient for a glyph `width` pixels wide centered on `(x, y)`
///
/// `None` when the highlight is disabled or would be fully transparent.
pub fn highlight_paint(
    style: &EmojiStyle,
    x: f32,
    y: f32,
    width: f32,
    font_size: f32,
) -> Option<(ShapePath, Fill)> {
    if !style.highlight_enabled {
        return None;
    }
    let peak = style.highlight_color.with_opacity(style.highlight_opacity);
    if peak.a == 0 {
        return None;
    }

    let height = font_size * style.highlight_size;
    let top = y - font_size * HIGHLIGHT_RISE;
    let fill = Fill::LinearGradient {
        start: Point::new(x - width / 2.0, top),
        end: Point::new(x + width / 2.0, top + height),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: peak,
            },
            GradientStop {
                offset: 0.5,
                color: style
                    .highlight_color
                    .with_opacity(style.highlight_opacity * HIGHLIGHT_MID_FADE),
            },
            GradientStop {
                offset: 1.0,
                color: style.highlight_color.with_opacity(0.0),
            },
        ],
    };
    let ellipse = ShapePath::Ellipse {
        center: Point::new(x, top + height / 2.0),
        radius_x: width / HIGHLIGHT_WIDTH_DIVISOR,
        radius_y: height / 2.0,
    };
    Some((ellipse, fill))
}

/// Paint the gloss under one placed glyph
pub fn draw_highlight(canvas: &mut dyn Canvas, style: &EmojiStyle, placement: &Placement, font_size: f32) {
    let width = canvas.measure_text(&placement.text, font_size);
    let Some((ellipse, fill)) = highlight_paint(style, placement.x, placement.y, width, font_size) else {
        return;
    };
    scoped(canvas, |c| {
        c.set_blend_mode(BlendMode::Overlay);
        c.fill(&ellipse, &fill);
    });
}

/// Highlight (when enabled) then text, for every placement
pub fn draw_glyphs(canvas: &mut dyn Canvas, style: &EmojiStyle, fit: &FitResult) {
    for placement in &fit.placements {
        draw_highlight(canvas, style, placement, fit.font_size);
        canvas.fill_text(
            &placement.text,
            placement.x,
            placement.y,
            fit.font_size,
            style.text_color,
        );
    }
}

/// Paint `text` in `style` onto a fresh canvas, returning the fit that was used
pub fn compose(canvas: &mut dyn Canvas, text: &str, style: &EmojiStyle) -> FitResult {
    draw_background(canvas, style);

    let plan = resolve_layout(text, style.layout);
    let fit = fit_layout(&*canvas, &plan, style, canvas.size() as f32);
    draw_glyphs(canvas, style, &fit);

    log::trace!(
        "composed {:?}: {} glyph unit(s) at {}px",
        text,
        fit.placements.len(),
        fit.font_size
    );
    fit
}
