use thiserror::Error;

use crate::{MAX_FILENAME_CHARS, MAX_LINES, MAX_TEXT_CHARS};

/// Why a text area or CSV file was rejected
///
/// Line numbers are 1-based and count blank lines, so they match what an
/// editor shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No text was entered")]
    Empty,

    #[error("Too many lines: {found} (at most {max})", max = MAX_LINES)]
    TooManyLines { found: usize },

    #[error("Line {line}: both the display text and the file name are required")]
    MissingField { line: usize },

    #[error("Line {line}: the display text and the file name cannot be empty")]
    EmptyField { line: usize },

    #[error("Line {line}: text must be at most {max} characters", max = MAX_TEXT_CHARS)]
    TextTooLong { line: usize },

    #[error("Line {line}: file name must be at most {max} characters", max = MAX_FILENAME_CHARS)]
    FilenameTooLong { line: usize },

    #[error("No usable entries were found")]
    NoData,
}

impl InputError {
    /// The offending line, when the error is about one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingField { line }
            | Self::EmptyField { line }
            | Self::TextTooLong { line }
            | Self::FilenameTooLong { line } => Some(*line),
            Self::Empty | Self::TooManyLines { .. } | Self::NoData => None,
        }
    }
}

impl From<InputError> for emojify_core::EmojifyError {
    fn from(err: InputError) -> Self {
        emojify_core::EmojifyError::Input(err.to_string())
    }
}
