//! Turning what people type into emoji requests
//!
//! Two formats are accepted, both one emoji per line:
//!
//! - **Text area** ([`parse_text_input`]): `text` or `text,filename`. When the
//!   file name is left out it is derived from the lowercase ASCII letters and
//!   digits of the text, or `emoji<line>` if none remain.
//! - **CSV** ([`parse_csv`]): `text,filename`, both required.
//!
//! Both trim the input, skip blank lines, strip double quotes from fields and
//! enforce the same limits. Anything after a second comma is ignored.
//!
//! ```
//! use emojify_input::parse_text_input;
//!
//! let items = parse_text_input("草\nやったね,yattane").unwrap();
//! assert_eq!(items[0].filename, "emoji1");
//! assert_eq!(items[1].filename, "yattane");
//! ```

mod error;

#[cfg(test)]
mod proptests;

use emojify_core::EmojiData;

pub use error::InputError;

/// Most lines a single input may hold, blank ones included.
pub const MAX_LINES: usize = 50;

/// Longest display text, in characters.
pub const MAX_TEXT_CHARS: usize = 20;

/// Longest file name (without extension), in characters.
pub const MAX_FILENAME_CHARS: usize = 32;

/// Shown by previews when there is nothing to show.
pub const PREVIEW_PLACEHOLDER: &str = "絵";

pub type Result<T> = std::result::Result<T, InputError>;

/// Parse text-area input: `text` or `text,filename` per line
pub fn parse_text_input(content: &str) -> Result<Vec<EmojiData>> {
    parse_lines(content, |number, line| match split_pair(line) {
        Some((text, filename)) => pair(number, text, filename),
        None => {
            if char_len(line) > MAX_TEXT_CHARS {
                return Err(InputError::TextTooLong { line: number });
            }
            let filename = derived_filename(line, number);
            Ok(EmojiData::new(line, filename))
        },
    })
}

/// Parse CSV input: `text,filename` per line, no header
pub fn parse_csv(content: &str) -> Result<Vec<EmojiData>> {
    parse_lines(content, |number, line| match split_pair(line) {
        Some((text, filename)) => pair(number, text, filename),
        None => Err(InputError::MissingField { line: number }),
    })
}

/// The text a live preview should draw for `content`
///
/// That is the text part of the first line, or [`PREVIEW_PLACEHOLDER`].
pub fn preview_text(content: &str) -> String {
    let first = content.trim().lines().next().unwrap_or_default().trim();
    let text = first.split(',').next().unwrap_or_default().trim();
    if text.is_empty() {
        PREVIEW_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

fn parse_lines<F>(content: &str, mut parse_line: F) -> Result<Vec<EmojiData>>
where
    F: FnMut(usize, &str) -> Result<EmojiData>,
{
    let content = content.trim();
    if content.is_empty() {
        return Err(InputError::Empty);
    }

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() > MAX_LINES {
        return Err(InputError::TooManyLines { found: lines.len() });
    }

    let mut items = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        items.push(parse_line(index + 1, line)?);
    }

    if items.is_empty() {
        return Err(InputError::NoData);
    }
    log::debug!("Parsed {} entries from {} lines", items.len(), lines.len());
    Ok(items)
}

/// First two comma-separated fields, trimmed and unquoted
fn split_pair(line: &str) -> Option<(String, String)> {
    let mut fields = line.split(',');
    let text = fields.next()?;
    let filename = fields.next()?;
    Some((unquote(text), unquote(filename)))
}

fn unquote(field: &str) -> String {
    field.trim().replace('"', "")
}

fn pair(number: usize, text: String, filename: String) -> Result<EmojiData> {
    if text.is_empty() || filename.is_empty() {
        return Err(InputError::EmptyField { line: number });
    }
    if char_len(&text) > MAX_TEXT_CHARS {
        return Err(InputError::TextTooLong { line: number });
    }
    if char_len(&filename) > MAX_FILENAME_CHARS {
        return Err(InputError::FilenameTooLong { line: number });
    }
    Ok(EmojiData::new(text, filename))
}

fn derived_filename(text: &str, number: usize) -> String {
    let stem: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if stem.is_empty() {
        format!("emoji{number}")
    } else {
        stem
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_filename() {
        assert_eq!(derived_filename("Hello World!", 1), "helloworld");
        assert_eq!(derived_filename("草", 7), "emoji7");
        assert_eq!(derived_filename("GG草2", 1), "gg2");
    }

    #[test]
    fn test_split_pair_ignores_extra_fields() {
        assert_eq!(
            split_pair(r#" "a" , b ,c"#),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(split_pair("no comma"), None);
    }

    #[test]
    fn test_error_line_numbers() {
        assert_eq!(InputError::TextTooLong { line: 3 }.line(), Some(3));
        assert_eq!(InputError::NoData.line(), None);
    }

    #[test]
    fn test_converts_into_core_error() {
        let err: emojify_core::EmojifyError = InputError::EmptyField { line: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid input: Line 2: the display text and the file name cannot be empty"
        );
    }
}
