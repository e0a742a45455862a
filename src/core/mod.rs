//! Core domain types for daily Wordle results
//!
//! Everything here is pure: no I/O, no clock reads, no shared state.

mod day_date;
mod error;
mod letter_result;
mod score;
mod word;
mod wordle_number;

pub use day_date::DayDate;
pub use error::CoreError;
pub use letter_result::{LetterResult, evaluate, is_solved, to_emoji};
pub use score::{EntryError, MAX_TRIES, Score, ScoresResponse};
pub use word::{WORD_LENGTH, Word, WordError};
pub use wordle_number::{FIRST_PUZZLE_DAY, wordle_number};
