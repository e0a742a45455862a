//! Error types for the pure scoring core

use super::DayDate;
use thiserror::Error;

/// Errors raised by date parsing, puzzle numbering and guess evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Date string did not split into exactly three numeric components
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// Guess and secret have different character counts
    #[error("Guess has {guess_len} letters but the word has {secret_len}")]
    InvalidInput { guess_len: usize, secret_len: usize },

    /// The calendar cannot represent this day (e.g. April 31)
    #[error("No such calendar day: {0}")]
    Calendar(DayDate),
}
