//! Puzzle numbering
//!
//! Puzzles are numbered by whole calendar days since the first puzzle day.
//! The arithmetic is done on plain calendar dates, so the result does not
//! depend on the machine's timezone.

use super::{CoreError, DayDate};
use chrono::NaiveDate;

/// Day of puzzle number 0
pub const FIRST_PUZZLE_DAY: DayDate = DayDate::new(2021, 6, 19);

/// Puzzle number for the given day
///
/// Days before [`FIRST_PUZZLE_DAY`] give negative numbers.
///
/// # Errors
/// Returns [`CoreError::Calendar`] if `date` is not a real calendar day.
///
/// # Examples
/// ```
/// use wordle_scores::core::{DayDate, wordle_number};
///
/// assert_eq!(wordle_number(DayDate::new(2022, 3, 10)), Ok(264));
/// assert!(wordle_number(DayDate::new(2022, 4, 31)).is_err());
/// ```
pub fn wordle_number(date: DayDate) -> Result<i64, CoreError> {
    let target = date.to_naive_date().ok_or(CoreError::Calendar(date))?;
    Ok(target.signed_duration_since(first_puzzle_date()).num_days())
}

fn first_puzzle_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(
        FIRST_PUZZLE_DAY.year,
        FIRST_PUZZLE_DAY.month,
        FIRST_PUZZLE_DAY.day,
    )
    .unwrap_or(NaiveDate::MIN)
}
