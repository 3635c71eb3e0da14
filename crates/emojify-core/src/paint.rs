//! Backend-neutral descriptions of what to paint

use crate::Color;

/// A point in canvas pixels, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Closed outlines a canvas knows how to fill, stroke and clip to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePath {
    Circle {
        center: Point,
        radius: f32,
    },
    RoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    },
    Ellipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
    },
}

/// One color stop of a gradient, `offset` in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// How a shape's interior is painted
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
}

/// Drop shadow cast by fills while active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Canvas-style blur amount; the Gaussian sigma is half of it
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Compositing operator for subsequent fills
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    SourceOver,
    /// Multiplies or screens depending on the backdrop
    Overlay,
}

