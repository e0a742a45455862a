//! Check command
//!
//! Evaluates guesses against a secret word without recording anything.

use crate::core::{CoreError, LetterResult, evaluate, is_solved};

/// Feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedGuess {
    pub guess: String,
    pub results: Vec<LetterResult>,
}

/// Result of checking a list of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub guesses: Vec<CheckedGuess>,
    pub solved: bool,
}

/// Evaluate each guess against `word`, case-insensitively
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if any guess differs in length from the word.
pub fn check_guesses(word: &str, guesses: &[String]) -> Result<CheckResult, CoreError> {
    let word = word.trim().to_lowercase();

    let guesses = guesses
        .iter()
        .map(|guess| {
            let guess = guess.trim().to_lowercase();
            let results = evaluate(&guess, &word)?;
            Ok::<_, CoreError>(CheckedGuess { guess, results })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let solved = guesses.last().is_some_and(|g| is_solved(&g.results));

    Ok(CheckResult {
        word,
        guesses,
        solved,
    })
}
