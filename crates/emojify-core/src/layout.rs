//! Layout selection: how many slots, and what goes in each
//!
//! Pure and deterministic. The same `(text, requested)` pair always yields
//! the same [`LayoutPlan`].
//!
//! Automatic resolution by grapheme count `n`:
//!
//! | n | layout |
//! |---|--------|
//! | 0-1 | single |
//! | 2 | horizontal |
//! | 3 | vertical |
//! | 4-6 | grid, `cols = min(3, ceil(n / 2))` |
//! | 7+ | single, the whole string drawn as one unit |

use icu_segmenter::GraphemeClusterSegmenter;

use crate::style::Layout;

/// Longest text the automatic policy still splits into a grid
pub const AUTO_GRID_MAX_CHARS: usize = 6;

/// A layout with every parameter decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLayout {
    Single,
    Horizontal,
    Vertical,
    Grid { cols: usize, rows: usize },
}

impl ResolvedLayout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Grid { .. } => "grid",
        }
    }
}

/// Output of the layout selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub layout: ResolvedLayout,
    /// Drawing units in reading order
    pub characters: Vec<String>,
}

/// Split `text` into user-perceived characters (extended grapheme clusters)
pub fn split_characters(text: &str) -> Vec<String> {
    let boundaries: Vec<usize> = GraphemeClusterSegmenter::new().segment_str(text).collect();
    boundaries
        .windows(2)
        .map(|pair| text[pair[0]..pair[1]].to_string())
        .collect()
}

/// Columns and rows of the grid used for `n` characters
pub fn grid_dimensions(n: usize) -> (usize, usize) {
    let cols = n.div_ceil(2).clamp(1, 3);
    let rows = n.div_ceil(cols).max(1);
    (cols, rows)
}

/// Decide the arrangement for `text`
///
/// Explicit requests pass through with the full character split; only
/// [`Layout::Auto`] looks at the character count.
pub fn resolve_layout(text: &str, requested: Layout) -> LayoutPlan {
    let characters = split_characters(text);
    let n = characters.len();

    let plan = match requested {
        Layout::Single => LayoutPlan {
            layout: ResolvedLayout::Single,
            characters,
        },
        Layout::Horizontal => LayoutPlan {
            layout: ResolvedLayout::Horizontal,
            characters,
        },
        Layout::Vertical => LayoutPlan {
            layout: ResolvedLayout::Vertical,
            characters,
        },
        Layout::Grid => grid(characters),
        Layout::Auto => match n {
            0 | 1 => whole(text),
            2 => LayoutPlan {
                layout: ResolvedLayout::Horizontal,
                characters,
            },
            3 => LayoutPlan {
                layout: ResolvedLayout::Vertical,
                characters,
            },
            4..=AUTO_GRID_MAX_CHARS => grid(characters),
            _ => whole(text),
        },
    };

    log::debug!(
        "layout: {:?} with {} chars -> {} ({} units)",
        requested,
        n,
        plan.layout.name(),
        plan.characters.len()
    );
    plan
}

fn whole(text: &str) -> LayoutPlan {
    LayoutPlan {
        layout: ResolvedLayout::Single,
        characters: vec![text.to_string()],
    }
}

fn grid(characters: Vec<String>) -> LayoutPlan {
    let (cols, rows) = grid_dimensions(characters.len());
    LayoutPlan {
        layout: ResolvedLayout::Grid { cols, rows },
        characters,
    }
}
