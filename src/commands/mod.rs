//! Command implementations

pub mod add;
pub mod check;
pub mod list;
pub mod number;
pub mod stats;

pub use add::{AddError, add_score};
pub use check::{CheckResult, CheckedGuess, check_guesses};
pub use list::{ListResult, list_scores};
pub use number::{PuzzleNumber, puzzle_number};
pub use stats::{LetterTotals, ScoreStatistics, compute_statistics};
