//! Fit sizing: the largest font size at which every glyph fits its slot
//!
//! Every layout shares one shrink loop: start from the configured size (or a
//! layout-specific cap), then step down one pixel at a time, re-measuring at
//! each step, until the layout's fit predicate holds or the size reaches
//! [`MIN_FONT_SIZE`]. Widths are measured afresh on every step because some
//! faces do not scale linearly across sizes, which also rules out a binary
//! search over the size range.

use crate::{
    layout::{LayoutPlan, ResolvedLayout},
    style::EmojiStyle,
    traits::TextMeasurer,
    MIN_FONT_SIZE,
};

/// Share of the drawable area a single unit may span horizontally
const SINGLE_MAX_WIDTH: f32 = 0.95;
/// Share of the drawable area a single unit's font size may reach
const SINGLE_MAX_SIZE: f32 = 0.85;
const PAIR_START_CAP: f32 = 0.5;
const PAIR_MAX_WIDTH: f32 = 0.48;
/// Horizontal centers of the pair, as fractions of the canvas
const PAIR_LEFT_X: f32 = 0.26;
const PAIR_RIGHT_X: f32 = 0.74;
/// Share of the drawable area stacks and grids are laid into
const BLOCK_SPAN: f32 = 0.95;
const STACK_START_CAP: f32 = 0.9;
const STACK_MAX_WIDTH: f32 = 0.9;
/// Baseline-to-baseline distance of a vertical stack, in font sizes
pub const LINE_SPACING: f32 = 1.1;
const GRID_START_CAP: f32 = 0.8;
const GRID_CELL_FILL: f32 = 0.9;

/// Where one drawing unit goes
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub text: String,
    /// Horizontal center
    pub x: f32,
    /// Vertical middle
    pub y: f32,
}

/// Chosen size plus every placement, in reading order
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub font_size: f32,
    pub placements: Vec<Placement>,
}

/// Canvas side minus the padding on both sides
pub fn drawable_area(canvas_size: f32, padding: f32) -> f32 {
    (canvas_size - 2.0 * padding).max(0.0)
}

/// Step down from `start` until `fits(size)` holds or the floor is reached
pub fn shrink_to_fit(start: f32, mut fits: impl FnMut(f32) -> bool) -> f32 {
    let mut size = start.max(MIN_FONT_SIZE);
    while size > MIN_FONT_SIZE && !fits(size) {
        size = (size - 1.0).max(MIN_FONT_SIZE);
    }
    size
}

/// Size and place the units of `plan` on a `canvas_size` square
pub fn fit_layout<M: TextMeasurer + ?Sized>(
    measurer: &M,
    plan: &LayoutPlan,
    style: &EmojiStyle,
    canvas_size: f32,
) -> FitResult {
    let area = drawable_area(canvas_size, style.padding);
    let center = canvas_size / 2.0;
    let widest = |size: f32| {
        plan.characters
            .iter()
            .map(|c| measurer.measure_text(c, size))
            .fold(0.0_f32, f32::max)
    };

    let result = match plan.layout {
        ResolvedLayout::Single => {
            let text = plan.characters.concat();
            let font_size = shrink_to_fit(style.font_size, |size| {
                measurer.measure_text(&text, size) <= area * SINGLE_MAX_WIDTH
                    && size <= area * SINGLE_MAX_SIZE
            });
            FitResult {
                font_size,
                placements: vec![Placement {
                    text,
                    x: center,
                    y: center,
                }],
            }
        },
        ResolvedLayout::Horizontal => {
            let pair: Vec<&String> = plan.characters.iter().take(2).collect();
            let max_width = area * PAIR_MAX_WIDTH;
            let start = style.font_size.min(area * PAIR_START_CAP);
            let font_size = shrink_to_fit(start, |size| {
                pair.iter().all(|c| measurer.measure_text(c, size) <= max_width)
            });
            let xs = [canvas_size * PAIR_LEFT_X, canvas_size * PAIR_RIGHT_X];
            FitResult {
                font_size,
                placements: pair
                    .into_iter()
                    .zip(xs)
                    .map(|(text, x)| Placement {
                        text: text.clone(),
                        x,
                        y: center,
                    })
                    .collect(),
            }
        },
        ResolvedLayout::Vertical => {
            let n = plan.characters.len().max(1) as f32;
            let start = style.font_size.min(area * BLOCK_SPAN / n * STACK_START_CAP);
            let font_size = shrink_to_fit(start, |size| widest(size) <= area * STACK_MAX_WIDTH);
            let step = font_size * LINE_SPACING;
            let top = center - (n - 1.0) * step / 2.0;
            FitResult {
                font_size,
                placements: plan
                    .characters
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Placement {
                        text: text.clone(),
                        x: center,
                        y: top + i as f32 * step,
                    })
                    .collect(),
            }
        },
        ResolvedLayout::Grid { cols, rows } => {
            let (cols, rows) = (cols.max(1), rows.max(1));
            let cell_width = area * BLOCK_SPAN / cols as f32;
            let cell_height = area * BLOCK_SPAN / rows as f32;
            let start = style.font_size.min(cell_width.min(cell_height) * GRID_START_CAP);
            let font_size = shrink_to_fit(start, |size| {
                widest(size) <= cell_width * GRID_CELL_FILL && size <= cell_height * GRID_CELL_FILL
            });
            let first_x = (canvas_size - cell_width * cols as f32) / 2.0 + cell_width / 2.0;
            let first_y = (canvas_size - cell_height * rows as f32) / 2.0 + cell_height / 2.0;
            FitResult {
                font_size,
                placements: plan
                    .characters
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Placement {
                        text: text.clone(),
                        x: first_x + (i % cols) as f32 * cell_width,
                        y: first_y + (i / cols) as f32 * cell_height,
                    })
                    .collect(),
            }
        },
    };

    log::debug!(
        "fit: {} at {}px (configured {}px, area {}px)",
        plan.layout.name(),
        result.font_size,
        style.font_size,
        area
    );
    result
}
