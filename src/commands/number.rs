//! Number command
//!
//! Looks up the puzzle number for a day.

use crate::core::{CoreError, DayDate, wordle_number};

/// Puzzle number for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleNumber {
    pub date: DayDate,
    pub number: i64,
}

/// Resolve `date` (`YYYY-MM-DD`, or `today` when absent) to its puzzle number
///
/// # Errors
/// Returns [`CoreError::InvalidDateFormat`] for an unparseable date and
/// [`CoreError::Calendar`] for a day that does not exist.
pub fn puzzle_number(date: Option<&str>, today: DayDate) -> Result<PuzzleNumber, CoreError> {
    let date = match date {
        Some(text) => text.trim().parse()?,
        None => today,
    };

    Ok(PuzzleNumber {
        date,
        number: wordle_number(date)?,
    })
}
