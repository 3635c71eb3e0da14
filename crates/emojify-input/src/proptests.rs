use proptest::prelude::*;

use super::*;

fn within_limits(items: &[EmojiData]) -> bool {
    items.iter().all(|item| {
        !item.text.is_empty()
            && !item.filename.is_empty()
            && item.text.chars().count() <= MAX_TEXT_CHARS
            && item.filename.chars().count() <= MAX_FILENAME_CHARS
    })
}

proptest! {
    #[test]
    fn text_input_results_respect_limits(content in "[a-zA-Z0-9草, \"\n]{0,200}") {
        if let Ok(items) = parse_text_input(&content) {
            prop_assert!(!items.is_empty());
            prop_assert!(items.len() <= MAX_LINES);
            prop_assert!(within_limits(&items));
        }
    }

    #[test]
    fn csv_results_respect_limits(content in "[a-z草, \"\n]{0,200}") {
        if let Ok(items) = parse_csv(&content) {
            prop_assert!(within_limits(&items));
            prop_assert!(items.iter().all(|item| !item.text.contains('"')));
        }
    }

    #[test]
    fn derived_filenames_are_ascii_alphanumeric(text in "\\PC{1,20}", line in 1usize..50) {
        let name = derived_filename(&text, line);
        prop_assert!(!name.is_empty());
        prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn preview_is_never_empty(content in "\\PC{0,40}") {
        prop_assert!(!preview_text(&content).is_empty());
    }
}
