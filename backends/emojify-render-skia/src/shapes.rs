//! From neutral shape descriptions and glyph outlines to tiny-skia paths

use emojify_core::{
    paint::{Point, ShapePath},
    traits::OutlinePen,
};
use kurbo::{BezPath, PathEl};
use tiny_skia::{Path, PathBuilder, Rect};

/// Cubic approximation of a quarter circle: 4/3 * tan(π/8)
const KAPPA: f32 = 0.552_284_8;

/// Build the outline of `shape`; `None` for degenerate sizes
pub(crate) fn shape_path(shape: &ShapePath) -> Option<Path> {
    match *shape {
        ShapePath::Circle { center, radius } => {
            if radius <= 0.0 {
                return None;
            }
            PathBuilder::from_circle(center.x, center.y, radius)
        },
        ShapePath::Ellipse {
            center,
            radius_x,
            radius_y,
        } => {
            if radius_x <= 0.0 || radius_y <= 0.0 {
                return None;
            }
            let oval = Rect::from_xywh(
                center.x - radius_x,
                center.y - radius_y,
                radius_x * 2.0,
                radius_y * 2.0,
            )?;
            PathBuilder::from_oval(oval)
        },
        ShapePath::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
        } => rounded_rect(x, y, width, height, radius),
    }
}

fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<Path> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(Rect::from_xywh(x, y, width, height)?));
    }
    let k = r * KAPPA;
    let (right, bottom) = (x + width, y + height);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Collects glyph outlines into one path, shifting each by the pen origin
pub(crate) struct GlyphPen {
    pub path: BezPath,
    pub origin: Point,
}

impl GlyphPen {
    pub fn new() -> Self {
        Self {
            path: BezPath::new(),
            origin: Point::new(0.0, 0.0),
        }
    }

    fn at(&self, x: f32, y: f32) -> (f64, f64) {
        ((x + self.origin.x) as f64, (y + self.origin.y) as f64)
    }
}

impl OutlinePen for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.at(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.at(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.at(cx0, cy0), self.at(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.at(cx0, cy0), self.at(cx1, cy1), self.at(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Translate kurbo's path format into tiny-skia's
pub(crate) fn to_skia_path(path: &BezPath) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounds() {
        let path = shape_path(&ShapePath::Circle {
            center: Point::new(64.0, 64.0),
            radius: 56.0,
        })
        .unwrap();
        let b = path.bounds();
        assert!((b.left() - 8.0).abs() < 1e-3);
        assert!((b.right() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_rounded_rect_bounds() {
        let path = shape_path(&ShapePath::RoundedRect {
            x: 8.0,
            y: 8.0,
            width: 112.0,
            height: 112.0,
            radius: 8.0,
        })
        .unwrap();
        let b = path.bounds();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (8.0, 8.0, 120.0, 120.0));
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(shape_path(&ShapePath::Circle {
            center: Point::new(64.0, 64.0),
            radius: 0.0,
        })
        .is_none());
        assert!(shape_path(&ShapePath::Ellipse {
            center: Point::new(64.0, 64.0),
            radius_x: 10.0,
            radius_y: 0.0,
        })
        .is_none());
    }

    #[test]
    fn test_glyph_pen_applies_origin() {
        let mut pen = GlyphPen::new();
        pen.origin = Point::new(10.0, 0.0);
        pen.move_to(0.0, 0.0);
        pen.line_to(5.0, 0.0);
        pen.line_to(5.0, 5.0);
        pen.close();

        let path = to_skia_path(&pen.path).unwrap();
        assert_eq!(path.bounds().left(), 10.0);
        assert_eq!(path.bounds().right(), 15.0);
    }

    #[test]
    fn test_empty_outline_has_no_path() {
        assert!(to_skia_path(&GlyphPen::new().path).is_none());
    }
}
