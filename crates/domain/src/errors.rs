use thiserror::Error;

/// Failure while reading a string into a [`TimePeriod`](crate::TimePeriod).
///
/// Every variant carries the byte offset into the input where the problem
/// was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing numeric token at offset {offset}")]
    MissingDigits { offset: usize },

    #[error("Non-numeric token not found at offset {offset}")]
    UnmatchedLiteral { offset: usize },

    #[error("Extra characters after expected end of input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("Could not parse as time units at offset {offset}")]
    UnrecognizedUnitWord { offset: usize },

    #[error("Misspelled or unrecognized unit at offset {offset}")]
    MisspelledUnit { offset: usize },

    #[error("Number out of range at offset {offset}")]
    NumberOutOfRange { offset: usize },

    #[error("Matcher failed at offset {offset}: {reason}")]
    MatcherFailed { offset: usize, reason: String },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::MissingDigits { offset }
            | ParseError::UnmatchedLiteral { offset }
            | ParseError::TrailingInput { offset }
            | ParseError::UnrecognizedUnitWord { offset }
            | ParseError::MisspelledUnit { offset }
            | ParseError::NumberOutOfRange { offset }
            | ParseError::MatcherFailed { offset, .. } => *offset,
        }
    }
}
