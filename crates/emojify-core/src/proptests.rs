use crate::{
    fit::{fit_layout, shrink_to_fit},
    layout::{resolve_layout, split_characters, ResolvedLayout},
    style::{EmojiStyle, Layout},
    traits::TextMeasurer,
    MIN_FONT_SIZE,
};
use proptest::prelude::*;

struct Proportional(f32);

impl TextMeasurer for Proportional {
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.0
    }
}

fn any_layout() -> impl Strategy<Value = Layout> {
    prop_oneof![
        Just(Layout::Auto),
        Just(Layout::Single),
        Just(Layout::Horizontal),
        Just(Layout::Vertical),
        Just(Layout::Grid),
    ]
}

// Property: layout selection is a pure function of its inputs
proptest! {
    #[test]
    fn prop_layout_is_deterministic(text in "\\PC{1,20}", layout in any_layout()) {
        prop_assert_eq!(resolve_layout(&text, layout), resolve_layout(&text, layout));
    }
}

// Property: the automatic policy only depends on the character count
proptest! {
    #[test]
    fn prop_auto_layout_by_count(text in "[a-zあ-ん]{1,20}") {
        let n = split_characters(&text).len();
        let plan = resolve_layout(&text, Layout::Auto);
        match n {
            1 => prop_assert_eq!(plan.layout, ResolvedLayout::Single),
            2 => prop_assert_eq!(plan.layout, ResolvedLayout::Horizontal),
            3 => prop_assert_eq!(plan.layout, ResolvedLayout::Vertical),
            4..=6 => {
                let is_grid = matches!(plan.layout, ResolvedLayout::Grid { .. });
                prop_assert!(is_grid);
                prop_assert_eq!(plan.characters.len(), n);
            },
            _ => {
                prop_assert_eq!(plan.layout, ResolvedLayout::Single);
                prop_assert_eq!(plan.characters, vec![text.clone()]);
            },
        }
    }
}

// Property: a grid always has room for every character
proptest! {
    #[test]
    fn prop_grid_holds_all_characters(text in "[a-z]{1,20}") {
        let plan = resolve_layout(&text, Layout::Grid);
        if let ResolvedLayout::Grid { cols, rows } = plan.layout {
            prop_assert!(cols * rows >= plan.characters.len());
            prop_assert!(cols <= 3);
        } else {
            prop_assert!(false, "forced grid resolved to {:?}", plan.layout);
        }
    }
}

// Property: the fitted size stays between the floor and the configured size
proptest! {
    #[test]
    fn prop_fit_size_bounds(
        text in "[a-zあ-ん]{1,20}",
        layout in any_layout(),
        font_size in 8.0f32..=120.0,
        padding in 0.0f32..=30.0,
        ratio in 0.2f32..3.0,
    ) {
        let style = EmojiStyle { font_size, padding, layout, ..EmojiStyle::default() };
        let plan = resolve_layout(&text, layout);
        let fit = fit_layout(&Proportional(ratio), &plan, &style, 128.0);
        prop_assert!(fit.font_size >= MIN_FONT_SIZE);
        prop_assert!(fit.font_size <= font_size.max(MIN_FONT_SIZE));
        prop_assert!(!fit.placements.is_empty());
    }
}

// Property: the shrink loop never lands below the floor, whatever the predicate
proptest! {
    #[test]
    fn prop_shrink_floor(start in -50.0f32..200.0, limit in -10.0f32..200.0) {
        let size = shrink_to_fit(start, |s| s <= limit);
        prop_assert!(size >= MIN_FONT_SIZE);
        if start >= MIN_FONT_SIZE && limit >= MIN_FONT_SIZE && start <= limit {
            prop_assert_eq!(size, start);
        }
    }
}
