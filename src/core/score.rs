//! A recorded daily result
//!
//! JSON layout:
//! ```json
//! { "id": 264, "date": "2022-03-10", "word": "lapse", "tries": ["stair", "peony", "lapse"] }
//! ```

use super::word::{Word, WordError};
use super::{CoreError, DayDate, LetterResult, evaluate, wordle_number};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most guesses allowed in one game
pub const MAX_TRIES: usize = 6;

/// One day's result: the secret word and the guesses in the order they were made
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Puzzle number
    pub id: i64,
    pub date: DayDate,
    pub word: String,
    pub tries: Vec<String>,
}

/// Body of the "fetch all scores" response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: Vec<Score>,
}

/// Why a typed-in result was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Invalid word: {0}")]
    Word(#[source] WordError),

    #[error("Invalid guess #{index}: {source}")]
    Try {
        index: usize,
        #[source]
        source: WordError,
    },

    #[error("Enter at least one guess")]
    NoTries,

    #[error("At most 6 guesses are allowed, got {0}")]
    TooManyTries(usize),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl Score {
    #[must_use]
    pub fn new(id: i64, date: DayDate, word: impl Into<String>, tries: Vec<String>) -> Self {
        Self {
            id,
            date,
            word: word.into(),
            tries,
        }
    }

    /// Build a result from hand-typed input
    ///
    /// Spaces are ignored anywhere in `word` and `tries`. `tries` is a
    /// comma-separated list of one to six 5-letter guesses. The puzzle number
    /// is derived from `today`.
    ///
    /// # Errors
    /// Returns `EntryError` if the word or any guess is not 5 letters, the
    /// guess count is out of range, or `today` is not a real calendar day.
    ///
    /// # Examples
    /// ```
    /// use wordle_scores::core::{DayDate, Score};
    ///
    /// let score = Score::from_entry("lapse", "stair, peony, lapse", DayDate::new(2022, 3, 10)).unwrap();
    /// assert_eq!(score.id, 264);
    /// assert_eq!(score.tries, ["stair", "peony", "lapse"]);
    /// ```
    pub fn from_entry(word: &str, tries: &str, today: DayDate) -> Result<Self, EntryError> {
        let word = Word::new(strip_spaces(word)).map_err(EntryError::Word)?;

        let tries_text = strip_spaces(tries);
        if tries_text.is_empty() {
            return Err(EntryError::NoTries);
        }

        let parts: Vec<&str> = tries_text.split(',').collect();
        if parts.len() > MAX_TRIES {
            return Err(EntryError::TooManyTries(parts.len()));
        }

        let tries = parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                Word::new(*part)
                    .map(Word::into_string)
                    .map_err(|source| EntryError::Try {
                        index: i + 1,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = wordle_number(today)?;

        Ok(Self::new(id, today, word.into_string(), tries))
    }

    /// Feedback rows for every guess, in order
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if a guess differs in length from the word.
    pub fn results(&self) -> Result<Vec<Vec<LetterResult>>, CoreError> {
        self.tries.iter().map(|t| evaluate(t, &self.word)).collect()
    }

    /// True when the last guess is the word
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tries.last().is_some_and(|t| *t == self.word)
    }

    /// Solved within the allowed number of guesses
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_solved() && self.tries.len() <= MAX_TRIES
    }
}

fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}
