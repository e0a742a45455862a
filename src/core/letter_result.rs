//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the secret word:
//! - `Correct` (green): same letter in the same position
//! - `WrongPosition` (yellow): letter is in the word elsewhere
//! - `Wrong` (gray): letter is not in the word, or all its occurrences are used up

use super::CoreError;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Correct,
    WrongPosition,
    Wrong,
}

impl LetterResult {
    /// Square emoji used in shared result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Wrong => '⬛',
        }
    }
}

/// Classify every letter of `guess` against `secret`
///
/// Implements Wordle's duplicate-letter rules: a letter repeated in the guess
/// is credited at most as many times as it appears in the secret.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from both words
/// 2. Second pass: for each unmarked letter, take the first remaining
///    occurrence in the secret and mark it as wrong position
/// 3. Everything still unmarked is wrong
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if the two words differ in length.
///
/// # Examples
/// ```
/// use wordle_scores::core::{LetterResult::*, evaluate};
///
/// let result = evaluate("mommy", "nymph").unwrap();
/// assert_eq!(result, [Wrong, Wrong, Correct, Wrong, WrongPosition]);
/// ```
pub fn evaluate(guess: &str, secret: &str) -> Result<Vec<LetterResult>, CoreError> {
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = secret.chars().map(Some).collect();

    if guess.len() != remaining.len() {
        return Err(CoreError::InvalidInput {
            guess_len: guess.len(),
            secret_len: remaining.len(),
        });
    }

    let mut result = vec![LetterResult::Wrong; guess.len()];

    // First pass: exact matches consume the secret letter at the same index
    for (i, &letter) in guess.iter().enumerate() {
        if remaining[i] == Some(letter) {
            result[i] = LetterResult::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: misplaced letters consume the first unused occurrence
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == LetterResult::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            result[i] = LetterResult::WrongPosition;
            *slot = None;
        }
    }

    Ok(result)
}

/// True when every letter is correct
#[must_use]
pub fn is_solved(results: &[LetterResult]) -> bool {
    !results.is_empty() && results.iter().all(|&r| r == LetterResult::Correct)
}

/// Render a row of results as emoji squares, e.g. "🟩🟨⬛⬛🟩"
#[must_use]
pub fn to_emoji(results: &[LetterResult]) -> String {
    results.iter().map(|r| r.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Correct, Wrong, WrongPosition};
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rustc_hash::FxHashMap;

    #[rstest]
    #[case("mommy", "nymph", [Wrong, Wrong, Correct, Wrong, WrongPosition])]
    #[case("yelps", "nymph", [WrongPosition, Wrong, Wrong, Correct, Wrong])]
    #[case("eerie", "sweet", [WrongPosition, WrongPosition, Wrong, Wrong, Wrong])]
    #[case("sweet", "sweet", [Correct; 5])]
    #[case("robot", "floor", [WrongPosition, WrongPosition, Wrong, Correct, Wrong])]
    #[case("speed", "erase", [WrongPosition, Wrong, WrongPosition, WrongPosition, Wrong])]
    #[case("abcde", "fghij", [Wrong; 5])]
    fn evaluates_like_the_game(
        #[case] guess: &str,
        #[case] secret: &str,
        #[case] expected: [LetterResult; 5],
    ) {
        assert_eq!(evaluate(guess, secret).unwrap(), expected);
    }

    #[test]
    fn exact_match_is_not_reused_as_misplaced() {
        // The E at index 4 is green, so the leading E has nothing left to claim
        assert_eq!(
            evaluate("eaaae", "bbbbe").unwrap(),
            [Wrong, Wrong, Wrong, Wrong, Correct]
        );
    }

    #[test]
    fn misplaced_claims_first_remaining_occurrence() {
        // Two Ls in the secret, three in the guess: only two get credit
        assert_eq!(
            evaluate("lllxx", "xxbll").unwrap(),
            [WrongPosition, WrongPosition, Wrong, WrongPosition, WrongPosition]
        );
    }

    #[test]
    fn guess_equal_to_secret_is_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "nymph"] {
            let result = evaluate(word, word).unwrap();
            assert!(is_solved(&result), "{word} should be solved");
        }
    }

    #[test]
    fn credit_never_exceeds_letter_count_in_secret() {
        let words = [
            "sweet", "eerie", "nymph", "mommy", "yelps", "robot", "floor", "speed", "erase",
            "geese", "eerie", "llama", "allay", "array",
        ];

        for guess in words {
            for secret in words {
                let result = evaluate(guess, secret).unwrap();

                let mut credited: FxHashMap<char, usize> = FxHashMap::default();
                for (letter, r) in guess.chars().zip(&result) {
                    if *r != Wrong {
                        *credited.entry(letter).or_insert(0) += 1;
                    }
                }

                for (letter, count) in credited {
                    let available = secret.chars().filter(|&c| c == letter).count();
                    assert!(
                        count <= available,
                        "{guess} vs {secret}: {letter} credited {count} times, secret has {available}"
                    );
                }
            }
        }
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert_eq!(
            evaluate("toolong", "short"),
            Err(CoreError::InvalidInput {
                guess_len: 7,
                secret_len: 5,
            })
        );
        assert!(evaluate("", "sweet").is_err());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(evaluate("SWEET", "sweet").unwrap(), [Wrong; 5]);
    }

    #[test]
    fn emoji_row() {
        let result = evaluate("yelps", "nymph").unwrap();
        assert_eq!(to_emoji(&result), "🟨⬛⬛🟩⬛");
        assert!(!is_solved(&result));
        assert!(!is_solved(&[]));
    }
}
